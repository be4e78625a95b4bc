use crate::core::{Pid, ProcId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedEvent {
    // `ahead` counts processes that will run before this one, including
    // the one currently on the CPU
    Admitted {
        proc: ProcId,
        pid: Pid,
        ahead: usize,
    },
    Dispatched {
        proc: ProcId,
        pid: Pid,
        first: bool,
    },
    // Quantum expired; process went back to the tail of the ready queue
    Preempted {
        proc: ProcId,
        pid: Pid,
        remaining: Ticks,
        ahead: usize,
    },
    Completed {
        proc: ProcId,
        pid: Pid,
    },
    // Ready queue empty while processes are still outstanding; the clock
    // skipped `ticks` ticks to the next arrival
    Idle {
        ticks: Ticks,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub time: Ticks,
    pub event: SchedEvent,
}
