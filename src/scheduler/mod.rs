pub mod round_robin;

use crate::core::{
    Ticks,
    state::{ProcId, SimCtx},
};
pub use round_robin::RoundRobin;

pub type EnqueueFlags = u64;

// First process admitted when the clock is seeded
pub const ENQ_INITIAL: EnqueueFlags = 1 << 0;
pub const ENQ_ARRIVAL: EnqueueFlags = 1 << 1;
// Quantum expired before the burst finished
pub const ENQ_REQUEUE: EnqueueFlags = 1 << 2;

pub trait Scheduler {
    fn init(ctx: &mut SimCtx, quantum: Ticks) -> Self;

    fn enqueue(&mut self, ctx: &mut SimCtx, proc: ProcId, flags: EnqueueFlags);

    fn dispatch(&mut self, ctx: &mut SimCtx) -> Option<ProcId>;

    // Maximum ticks `proc` may run before being preempted
    fn slice(&self, ctx: &SimCtx, proc: ProcId) -> Ticks;
}
