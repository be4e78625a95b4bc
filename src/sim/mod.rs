pub mod driver;
pub mod process;
pub mod workload;

pub use driver::{Schedule, Sim, simulate, validate};
pub use process::ProcessSpec;
pub use workload::bernoulli_processes;
