use rustc_hash::FxHashSet;
use std::collections::VecDeque;

// Index into the process table
pub type ProcId = usize;
pub type Pid = u32;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Unarrived,
    Admitted,
    Running { start: Ticks },
    Waiting { start: Ticks },
    Completed { start: Ticks, end: Ticks },
}

#[derive(Debug, Clone)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub time_run: Ticks,
    pub state: ProcState,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            time_run: 0,
            state: ProcState::Unarrived,
        }
    }

    pub fn start_time(&self) -> Option<Ticks> {
        match self.state {
            ProcState::Running { start }
            | ProcState::Waiting { start }
            | ProcState::Completed { start, .. } => Some(start),
            ProcState::Unarrived | ProcState::Admitted => None,
        }
    }

    pub fn end_time(&self) -> Option<Ticks> {
        match self.state {
            ProcState::Completed { end, .. } => Some(end),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, ProcState::Completed { .. })
    }

    pub fn remaining(&self) -> Ticks {
        self.burst_time - self.time_run
    }
}

#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub procs: Vec<Process>,
    pub ready: VecDeque<ProcId>,
    pub current: Option<ProcId>,
    // Mirror of `ready` for O(1) membership checks
    queued: FxHashSet<ProcId>,
    completed: usize,
}

impl SimCtx {
    pub fn new(procs: Vec<Process>) -> Self {
        Self {
            now: 0,
            ready: VecDeque::with_capacity(procs.len()),
            queued: FxHashSet::default(),
            procs,
            current: None,
            completed: 0,
        }
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn proc(&self, id: ProcId) -> &Process {
        &self.procs[id]
    }

    pub fn proc_mut(&mut self, id: ProcId) -> &mut Process {
        &mut self.procs[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.procs.len()
    }

    // Earliest arrival among processes not yet admitted
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.procs
            .iter()
            .filter(|p| p.state == ProcState::Unarrived)
            .map(|p| p.arrival_time)
            .min()
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.procs.len()
    }

    pub fn in_ready_queue(&self, id: ProcId) -> bool {
        self.queued.contains(&id)
    }

    pub fn ready_push_back(&mut self, id: ProcId) {
        assert!(
            self.queued.insert(id),
            "Process {id} already present in the ready queue"
        );
        debug_assert!(
            !self.proc(id).is_completed(),
            "Completed process {id} cannot be enqueued"
        );
        self.ready.push_back(id);
    }

    pub fn ready_pop_front(&mut self) -> Option<ProcId> {
        let id = self.ready.pop_front()?;
        let removed = self.queued.remove(&id);
        debug_assert!(removed, "Process {id} missing ready queue membership");
        Some(id)
    }

    pub fn mark_admitted(&mut self, id: ProcId) {
        let proc = self.proc_mut(id);
        debug_assert_eq!(
            proc.state,
            ProcState::Unarrived,
            "Process {id} admitted twice"
        );
        proc.state = ProcState::Admitted;
    }

    // Returns true on the process's first dispatch tick
    pub fn set_running(&mut self, id: ProcId) -> bool {
        debug_assert!(
            !self.queued.contains(&id),
            "Running process {id} must not be enqueued"
        );
        debug_assert!(
            self.current.is_none_or(|cur| cur == id),
            "Another process is already current"
        );

        self.current = Some(id);
        // The tick being executed began one tick before `now`
        let began = self.now.saturating_sub(1);
        let proc = self.proc_mut(id);
        match proc.state {
            ProcState::Admitted => {
                proc.state = ProcState::Running { start: began };
                true
            }
            ProcState::Waiting { start } => {
                proc.state = ProcState::Running { start };
                false
            }
            ProcState::Running { .. } => false,
            state => unreachable!("process {id} dispatched from {state:?}"),
        }
    }

    pub fn mark_waiting(&mut self, id: ProcId) {
        let proc = self.proc_mut(id);
        match proc.state {
            ProcState::Running { start } => proc.state = ProcState::Waiting { start },
            state => debug_assert!(false, "Process {id} preempted from {state:?}"),
        }
        self.clear_current();
    }

    pub fn mark_completed(&mut self, id: ProcId, end: Ticks) {
        debug_assert!(
            !self.queued.contains(&id),
            "Completing process {id} that is still enqueued"
        );

        let proc = &mut self.procs[id];
        let ProcState::Running { start } = proc.state else {
            unreachable!("process {id} must have been running before marked complete");
        };
        debug_assert_eq!(proc.time_run, proc.burst_time);

        proc.state = ProcState::Completed { start, end };
        self.completed += 1;
        self.clear_current();
    }

    pub fn clear_current(&mut self) {
        self.current = None;
    }
}
