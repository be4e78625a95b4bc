use env_logger::{Builder, Env};
use rr_model::{Error, RoundRobin, Sim, config::Config, input::load_processes, report};

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let config = Config::new();

    if let Err(e) = run(&config) {
        eprintln!("rr: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let procs = load_processes(&config.input)?;
    let sim = if config.trace {
        Sim::<RoundRobin>::traced(&procs, config.quantum)?
    } else {
        Sim::<RoundRobin>::new(&procs, config.quantum)?
    };
    let schedule = sim.run();

    for event in &schedule.trace {
        println!("{}", report::trace_line(event));
    }
    if config.per_process {
        print!("{}", report::process_table(&schedule));
    }
    print!("{}", report::summary(&schedule.metrics));

    Ok(())
}
