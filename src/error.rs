use thiserror::Error;

use crate::core::Pid;

// Raised before any simulation runs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("quantum must be a positive number of ticks")]
    InvalidQuantum,

    #[error("process {pid} has a burst time of zero")]
    InvalidBurst { pid: Pid },

    #[error("no processes to schedule")]
    EmptyInput,

    #[error("process id {pid} appears more than once")]
    DuplicateId { pid: Pid },
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("reached end of input while looking for the {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("integer at byte {offset} does not fit in 32 bits")]
    Overflow { offset: usize },

    #[error("invalid quantum {0:?}: expected decimal digits only")]
    InvalidQuantum(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Sched(#[from] SchedError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
