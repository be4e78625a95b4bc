use std::path::PathBuf;

use clap::Parser;

use crate::{core::Ticks, input::parse_quantum};

#[derive(Debug, Clone, Parser)]
#[command(name = "rr")]
#[command(about = "Simulate round-robin CPU scheduling and report average waiting and response time")]
#[command(version)]
pub struct Config {
    #[arg(help = "Process file: a count followed by `id arrival burst` triples")]
    pub input: PathBuf,

    #[arg(
        value_parser = parse_quantum,
        env = "RR_QUANTUM",
        help = "Time quantum in ticks (decimal digits only)"
    )]
    pub quantum: Ticks,

    #[arg(
        long = "per-process",
        help = "Print start, end, waiting and response time for every process"
    )]
    pub per_process: bool,

    #[arg(long, help = "Print every scheduling event as it happened")]
    pub trace: bool,
}

impl Config {
    pub fn new() -> Self {
        Config::parse()
    }
}
