use rand::prelude::*;

use super::process::ProcessSpec;
use crate::core::{Pid, Ticks};

// Each tick a process arrives with probability `p_arrival`; it is short with
// probability `p_short`
pub fn bernoulli_processes(
    ticks: Ticks,
    p_arrival: f64,
    p_short: f64,
    short_ticks: Ticks,
    long_ticks: Ticks,
    seed: u64,
) -> Vec<ProcessSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut procs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst_time = if rng.random::<f64>() < p_short {
                short_ticks
            } else {
                long_ticks
            };

            procs.push(ProcessSpec {
                pid: procs.len() as Pid + 1,
                arrival_time: t,
                burst_time,
            });
        }
    }

    procs
}
