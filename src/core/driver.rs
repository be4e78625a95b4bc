use log::{debug, trace};

use super::{
    event::{SchedEvent, TimedEvent},
    observer::Observer,
    state::{ProcId, ProcState, Process, SimCtx, Ticks},
};
use crate::scheduler::{ENQ_ARRIVAL, ENQ_INITIAL, ENQ_REQUEUE, EnqueueFlags, Scheduler};

pub struct SchedCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(procs: Vec<Process>, quantum: Ticks) -> Self {
        let mut ctx = SimCtx::new(procs);
        let scheduler = S::init(&mut ctx, quantum);
        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
        }
    }

    // Seed the clock with the earliest arrival and admit that process alone.
    // Ties go to the lowest index.
    pub fn admit_first(&mut self) -> Option<TimedEvent> {
        let (first, arrival) = self
            .ctx
            .procs
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| p.arrival_time)
            .map(|(id, p)| (id, p.arrival_time))?;

        self.ctx.now = arrival;
        Some(self.admit(first, ENQ_INITIAL))
    }

    // One dispatch round: pick the head of the ready queue and run it for up
    // to one slice, stopping early on completion. With nothing runnable the
    // clock jumps to the next arrival instead.
    pub fn round(&mut self) -> Vec<TimedEvent> {
        let mut events = Vec::new();

        let Some(id) = self.scheduler.dispatch(&mut self.ctx) else {
            self.skip_idle(&mut events);
            return events;
        };

        self.ctx.current = Some(id);
        let proc = self.ctx.proc(id);
        let first = proc.state == ProcState::Admitted;
        debug!(
            "t={} dispatch pid {} (run {}/{})",
            self.ctx.now, proc.pid, proc.time_run, proc.burst_time
        );
        events.push(self.stamp(SchedEvent::Dispatched {
            proc: id,
            pid: proc.pid,
            first,
        }));
        let slice = self.scheduler.slice(&self.ctx, id);

        for _ in 0..slice {
            self.ctx.advance_time(1);
            self.admit_arrivals(&mut events);

            self.ctx.set_running(id);
            let now = self.ctx.now;
            let proc = self.ctx.proc_mut(id);
            proc.time_run += 1;
            let done = proc.time_run == proc.burst_time;
            trace!("t={now} pid {} ran to {}", proc.pid, proc.time_run);

            if done {
                self.ctx.mark_completed(id, now);
                let pid = self.ctx.proc(id).pid;
                debug!("t={now} pid {pid} completed");
                events.push(self.stamp(SchedEvent::Completed { proc: id, pid }));
                self.observer.observe(&self.ctx);
                return events;
            }

            self.observer.observe(&self.ctx);
        }

        self.ctx.mark_waiting(id);
        let ahead = self.ctx.ready.len();
        self.scheduler.enqueue(&mut self.ctx, id, ENQ_REQUEUE);
        let proc = self.ctx.proc(id);
        debug!(
            "t={} pid {} preempted with {} left",
            self.ctx.now,
            proc.pid,
            proc.remaining()
        );
        events.push(self.stamp(SchedEvent::Preempted {
            proc: id,
            pid: proc.pid,
            remaining: proc.remaining(),
            ahead,
        }));

        events
    }

    // Ready queue is empty: every skipped tick would be idle, so advance
    // straight to the next arrival and admit it
    fn skip_idle(&mut self, events: &mut Vec<TimedEvent>) {
        let next_tick = self.ctx.now.saturating_add(1);
        let target = self
            .ctx
            .next_arrival()
            .map_or(next_tick, |arrival| arrival.max(next_tick));
        let span = target - self.ctx.now;

        self.ctx.advance_time(span);
        self.admit_arrivals(events);
        debug!("t={} idle for {span} ticks", self.ctx.now);
        events.push(self.stamp(SchedEvent::Idle { ticks: span }));
        self.observer.observe_idle(&self.ctx, span);
    }

    // Scan every process (in index order) for arrivals at or before `now`
    fn admit_arrivals(&mut self, events: &mut Vec<TimedEvent>) {
        let now = self.ctx.now;
        for id in 0..self.ctx.len() {
            let proc = self.ctx.proc(id);
            if proc.state == ProcState::Unarrived && proc.arrival_time <= now {
                events.push(self.admit(id, ENQ_ARRIVAL));
            }
        }
    }

    fn admit(&mut self, id: ProcId, flags: EnqueueFlags) -> TimedEvent {
        // The process on the CPU, if any, runs before anything queued now
        let ahead = self.ctx.ready.len() + usize::from(self.ctx.current.is_some());
        self.ctx.mark_admitted(id);
        self.scheduler.enqueue(&mut self.ctx, id, flags);
        let pid = self.ctx.proc(id).pid;
        debug!("t={} admitted pid {pid} behind {ahead}", self.ctx.now);
        self.stamp(SchedEvent::Admitted {
            proc: id,
            pid,
            ahead,
        })
    }

    fn stamp(&self, event: SchedEvent) -> TimedEvent {
        TimedEvent {
            time: self.ctx.now,
            event,
        }
    }

    pub fn all_completed(&self) -> bool {
        self.ctx.all_completed()
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
