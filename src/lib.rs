//! Deterministic simulator for disk head scheduling policies.
//!
//! Feeds a recorded (or synthesized) sequence of cylinder requests through a
//! bounded batching queue under C-SCAN, SSTF and FIFO dispatch, and reports
//! the mean per-request completion time for every (policy, queue bound)
//! combination.

use crate::config::Config;
use crate::domain::experiment::{Experiment, ExperimentRow};
use crate::error::Result;
use crate::loader::load_trace;

pub mod config;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod report;

/// Loads the configured trace and runs the full experiment grid.
pub fn run_experiments(config: &Config) -> Result<Vec<ExperimentRow>> {
    let trace = load_trace(&config.source)?;
    log::info!("Trace ready: head starts at cylinder {}, {} arrivals queued.", trace.start_head, trace.arrivals.len());

    let experiment = Experiment::new(config.algorithm, config.queue_size);

    Ok(experiment.run(&trace))
}
