use crate::core::{Pid, Process, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl ProcessSpec {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
        }
    }
}

impl From<&ProcessSpec> for Process {
    fn from(spec: &ProcessSpec) -> Self {
        Process::new(spec.pid, spec.arrival_time, spec.burst_time)
    }
}
