pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod metrics;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use crate::core::{Pid, ProcState, Process, SchedEvent, Ticks, TimedEvent};
pub use error::{Error, ParseError, SchedError};
pub use metrics::Metrics;
pub use scheduler::{RoundRobin, Scheduler};
pub use sim::{ProcessSpec, Schedule, Sim, simulate};
