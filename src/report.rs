use std::fmt::Write;

use crate::{
    core::TimedEvent,
    metrics::{Metrics, response_time, waiting_time},
    sim::Schedule,
};

pub fn summary(metrics: &Metrics) -> String {
    format!(
        "Average waiting time: {:.2}\nAverage response time: {:.2}\n",
        metrics.average_waiting, metrics.average_response
    )
}

pub fn process_table(schedule: &Schedule) -> String {
    let mut out = format!(
        "{:>6} {:>8} {:>6} {:>6} {:>6} {:>8} {:>9}\n",
        "pid", "arrival", "burst", "start", "end", "waiting", "response"
    );
    for proc in &schedule.processes {
        let cell = |v: Option<u64>| v.map_or_else(|| "-".to_owned(), |v| v.to_string());
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:>6} {:>8} {:>6} {:>6} {:>6} {:>8} {:>9}",
            proc.pid,
            proc.arrival_time,
            proc.burst_time,
            cell(proc.start_time()),
            cell(proc.end_time()),
            cell(waiting_time(proc)),
            cell(response_time(proc)),
        );
    }
    let _ = writeln!(
        out,
        "finished at t={} ({} idle ticks, longest idle stretch {})",
        schedule.finish_time, schedule.idle_ticks, schedule.longest_idle
    );
    out
}

pub fn trace_line(event: &TimedEvent) -> String {
    format!("t={} {:?}", event.time, event.event)
}
