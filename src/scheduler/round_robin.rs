use log::trace;

use super::{ENQ_REQUEUE, EnqueueFlags, ProcId, Scheduler, SimCtx, Ticks};
use crate::core::ProcState;

#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl Scheduler for RoundRobin {
    fn init(_ctx: &mut SimCtx, quantum: Ticks) -> Self {
        Self { quantum }
    }

    // Strict FIFO: arrivals and requeues both go to the tail
    fn enqueue(&mut self, ctx: &mut SimCtx, proc: ProcId, flags: EnqueueFlags) {
        let requeue = flags & ENQ_REQUEUE != 0;
        debug_assert_eq!(
            requeue,
            matches!(ctx.proc(proc).state, ProcState::Waiting { .. }),
            "process {proc} enqueued with flags {flags:#x} from {:?}",
            ctx.proc(proc).state
        );
        trace!(
            "t={} enqueue proc {proc} at position {} ({})",
            ctx.now,
            ctx.ready.len(),
            if requeue { "requeue" } else { "arrival" }
        );
        ctx.ready_push_back(proc);
    }

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<ProcId> {
        ctx.ready_pop_front()
    }

    fn slice(&self, _ctx: &SimCtx, _proc: ProcId) -> Ticks {
        self.quantum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Process;
    use crate::scheduler::{ENQ_ARRIVAL, ENQ_INITIAL};

    #[test]
    fn dispatches_in_enqueue_order() {
        let mut ctx = SimCtx::new((0..3).map(|i| Process::new(i, 0, 1)).collect());
        let mut rr = RoundRobin::init(&mut ctx, 4);
        for id in 0..3 {
            ctx.mark_admitted(id);
        }

        rr.enqueue(&mut ctx, 2, ENQ_ARRIVAL);
        rr.enqueue(&mut ctx, 0, ENQ_ARRIVAL);
        rr.enqueue(&mut ctx, 1, ENQ_INITIAL);

        assert_eq!(rr.dispatch(&mut ctx), Some(2));
        assert_eq!(rr.dispatch(&mut ctx), Some(0));
        assert_eq!(rr.dispatch(&mut ctx), Some(1));
        assert_eq!(rr.dispatch(&mut ctx), None);
        assert_eq!(rr.slice(&ctx, 0), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "enqueued with flags")]
    fn requeue_flag_must_match_waiting_state() {
        let mut ctx = SimCtx::new(vec![Process::new(1, 0, 2)]);
        let mut rr = RoundRobin::init(&mut ctx, 1);
        ctx.mark_admitted(0);
        rr.enqueue(&mut ctx, 0, ENQ_REQUEUE);
    }
}
