use anyhow::{Context, Result};
use clap::Parser;
use pow_core::{Simulation, SystemClock};

mod cli;
mod config;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.debug { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();

    let config = config::from_args(&args)?;
    let simulation = Simulation::new(config).context("invalid simulation config")?;
    let report = simulation
        .run(&SystemClock::new())
        .context("simulation failed")?;

    log::debug!(
        "Single search: {} attempts, 2-of-3 search: {} attempts",
        report.single.search.attempts,
        report.dual.search.attempts
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        println!("{}", report);
    }

    Ok(())
}
