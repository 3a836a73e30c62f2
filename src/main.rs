use anyhow::Context;
use clap::Parser;

use disk_sched_sim::config::{Cli, Config};
use disk_sched_sim::{logger, report, run_experiments};

fn main() {
    logger::init();

    let config = Config::from(Cli::parse());

    if let Err(e) = run(&config) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let rows = run_experiments(config).context("Simulation failed")?;

    report::print_summary(&rows);

    if let Some(path) = &config.csv {
        report::write_csv(path, &rows).with_context(|| format!("Could not write CSV report to '{}'", path.display()))?;
        log::info!("CSV report written to '{}'.", path.display());
    }

    Ok(())
}
