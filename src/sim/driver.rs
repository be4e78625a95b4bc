use log::info;
use rustc_hash::FxHashSet;

use super::process::ProcessSpec;
use crate::{
    core::{Pid, Process, SchedCore, TimedEvent, Ticks},
    error::SchedError,
    metrics::Metrics,
    scheduler::{RoundRobin, Scheduler},
};

pub fn validate(procs: &[ProcessSpec], quantum: Ticks) -> Result<(), SchedError> {
    if quantum == 0 {
        return Err(SchedError::InvalidQuantum);
    }
    if procs.is_empty() {
        return Err(SchedError::EmptyInput);
    }

    let mut seen = FxHashSet::default();
    for proc in procs {
        if proc.burst_time == 0 {
            return Err(SchedError::InvalidBurst { pid: proc.pid });
        }
        if !seen.insert(proc.pid) {
            return Err(SchedError::DuplicateId { pid: proc.pid });
        }
    }

    Ok(())
}

pub fn simulate(procs: &[ProcessSpec], quantum: Ticks) -> Result<Schedule, SchedError> {
    Ok(Sim::<RoundRobin>::new(procs, quantum)?.run())
}

#[derive(Debug, Clone)]
pub struct Schedule {
    pub quantum: Ticks,
    // Input order
    pub processes: Vec<Process>,
    pub metrics: Metrics,
    pub finish_time: Ticks,
    pub idle_ticks: Ticks,
    pub longest_idle: Ticks,
    // Empty unless built with `Sim::traced`
    pub trace: Vec<TimedEvent>,
}

impl Schedule {
    pub fn process(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.pid == pid)
    }
}

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    quantum: Ticks,
    trace: Option<Vec<TimedEvent>>,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(procs: &[ProcessSpec], quantum: Ticks) -> Result<Self, SchedError> {
        Self::build(procs, quantum, false)
    }

    pub fn traced(procs: &[ProcessSpec], quantum: Ticks) -> Result<Self, SchedError> {
        Self::build(procs, quantum, true)
    }

    fn build(procs: &[ProcessSpec], quantum: Ticks, traced: bool) -> Result<Self, SchedError> {
        validate(procs, quantum)?;

        let mut core = SchedCore::<S>::new(procs.iter().map(Process::from).collect(), quantum);
        let first = core.admit_first();
        let trace = traced.then(|| first.into_iter().collect());

        Ok(Self {
            core,
            quantum,
            trace,
        })
    }

    pub fn step(&mut self) -> Vec<TimedEvent> {
        let events = self.core.round();
        if let Some(trace) = self.trace.as_mut() {
            trace.extend(events.iter().cloned());
        }
        events
    }

    pub fn all_completed(&self) -> bool {
        self.core.all_completed()
    }

    pub fn procs_map<'a, T>(
        &'a self,
        f: impl Fn(&Process) -> T + 'a,
    ) -> impl Iterator<Item = T> + 'a {
        self.core.ctx.procs.iter().map(f)
    }

    pub fn run(mut self) -> Schedule {
        info!(
            "simulating {} processes from t={} with quantum {}",
            self.core.ctx.len(),
            self.core.now(),
            self.quantum
        );

        while !self.all_completed() {
            self.step();
        }

        let metrics = Metrics::from_processes(&self.core.ctx.procs);
        info!(
            "all processes completed at t={}: avg waiting {:.2}, avg response {:.2}",
            self.core.now(),
            metrics.average_waiting,
            metrics.average_response
        );

        let observer = self.core.observer();
        let (idle_ticks, longest_idle) = (observer.idle_ticks(), observer.longest_idle());
        Schedule {
            quantum: self.quantum,
            finish_time: self.core.now(),
            idle_ticks,
            longest_idle,
            metrics,
            trace: self.trace.unwrap_or_default(),
            processes: self.core.ctx.procs,
        }
    }
}
