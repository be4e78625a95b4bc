use super::state::{ProcState, SimCtx, Ticks};

#[derive(Debug, Default)]
pub struct Observer {
    ticks: Ticks,
    idle_ticks: Ticks,
    current_idle: Ticks,
    longest_idle: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    // Called once per executed tick, after admission and dispatch accounting
    pub fn observe(&mut self, ctx: &SimCtx) {
        self.ticks += 1;
        self.current_idle = 0;
        self.check(ctx);
    }

    // Credit a whole idle stretch at once
    pub fn observe_idle(&mut self, ctx: &SimCtx, span: Ticks) {
        self.ticks += span;
        self.idle_ticks += span;
        self.current_idle += span;
        self.longest_idle = self.longest_idle.max(self.current_idle);
        self.check(ctx);
    }

    fn check(&self, ctx: &SimCtx) {
        if let Some(id) = ctx.current {
            debug_assert!(
                matches!(ctx.proc(id).state, ProcState::Running { .. }),
                "current process {id} must be Running"
            );
        }

        for &id in &ctx.ready {
            let proc = ctx.proc(id);
            debug_assert!(
                matches!(proc.state, ProcState::Admitted | ProcState::Waiting { .. }),
                "process {id} in ready queue with state {:?}",
                proc.state
            );
            debug_assert!(
                ctx.in_ready_queue(id),
                "ready queue holds process {id} without membership"
            );
            debug_assert_ne!(
                ctx.current,
                Some(id),
                "current process {id} must not appear in the ready queue"
            );
        }

        debug_assert_eq!(
            ctx.completed_count(),
            ctx.procs.iter().filter(|p| p.is_completed()).count(),
            "completed counter out of sync"
        );
    }

    pub fn ticks(&self) -> Ticks {
        self.ticks
    }

    pub fn idle_ticks(&self) -> Ticks {
        self.idle_ticks
    }

    pub fn longest_idle(&self) -> Ticks {
        self.longest_idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;

    #[test]
    fn tracks_longest_idle_stretch() {
        let ctx = SimCtx::new(vec![Process::new(1, 0, 1)]);
        let mut observer = Observer::new();
        observer.observe_idle(&ctx, 2);
        observer.observe(&ctx);
        observer.observe_idle(&ctx, 1);
        observer.observe_idle(&ctx, 2);
        observer.observe(&ctx);

        assert_eq!(observer.ticks(), 7);
        assert_eq!(observer.idle_ticks(), 5);
        assert_eq!(observer.longest_idle(), 3);
    }
}
