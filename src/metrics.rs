use average::Estimate;

use crate::core::{Process, Ticks};

// Ticks spent in the ready queue: `end - arrival - burst`
pub fn waiting_time(proc: &Process) -> Option<Ticks> {
    let end = proc.end_time()?;
    Some(end - proc.arrival_time - proc.burst_time)
}

// Ticks from arrival to first dispatch: `start - arrival`
pub fn response_time(proc: &Process) -> Option<Ticks> {
    let start = proc.start_time()?;
    Some(start - proc.arrival_time)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub count: usize,
    pub total_waiting: Ticks,
    pub total_response: Ticks,
    pub average_waiting: f64,
    pub average_response: f64,
}

impl Metrics {
    // Processes that never completed are skipped
    pub fn from_processes(procs: &[Process]) -> Self {
        let waiting: Vec<Ticks> = procs.iter().filter_map(waiting_time).collect();
        let response: Vec<Ticks> = procs
            .iter()
            .filter(|p| p.is_completed())
            .filter_map(response_time)
            .collect();

        Self {
            count: waiting.len(),
            total_waiting: waiting.iter().sum(),
            total_response: response.iter().sum(),
            average_waiting: avg(waiting.iter().map(|&t| t as f64)),
            average_response: avg(response.iter().map(|&t| t as f64)),
        }
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProcState;

    fn completed(arrival: Ticks, burst: Ticks, start: Ticks, end: Ticks) -> Process {
        let mut proc = Process::new(0, arrival, burst);
        proc.time_run = burst;
        proc.state = ProcState::Completed { start, end };
        proc
    }

    #[test]
    fn per_process_times() {
        let proc = completed(2, 3, 4, 9);
        assert_eq!(waiting_time(&proc), Some(4));
        assert_eq!(response_time(&proc), Some(2));

        let unstarted = Process::new(1, 0, 1);
        assert_eq!(waiting_time(&unstarted), None);
        assert_eq!(response_time(&unstarted), None);
    }

    #[test]
    fn averages_are_real_valued() {
        let procs = vec![completed(0, 4, 0, 6), completed(0, 4, 2, 8), completed(1, 1, 2, 3)];
        let metrics = Metrics::from_processes(&procs);

        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.total_waiting, 7);
        assert_eq!(metrics.total_response, 3);
        assert!((metrics.average_waiting - 7.0 / 3.0).abs() < 1e-9);
        assert!((metrics.average_response - 1.0).abs() < 1e-9);
    }
}
