use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

use crate::domain::policy::PolicyKind;
use crate::domain::request::{Cylinder, NUM_CYLINDERS};

/// Command-line surface of the simulator.
///
/// Parsed once at process entry and converted into [`Config`]; nothing else
/// in the crate touches process arguments or the environment.
#[derive(Debug, Parser)]
#[command(name = "disk_sched_sim", version, about = "Disk head scheduling simulation")]
pub struct Cli {
    /// Trace file with one integer per line; the first value is the starting
    /// head position, all following values are the ordered arrivals.
    #[arg(value_name = "TRACE", required_unless_present = "generate")]
    pub input: Option<PathBuf>,

    /// Scheduling algorithm to simulate (C-SCAN, SSTF or FIFO,
    /// case-insensitive). All three run when omitted.
    #[arg(long)]
    pub algorithm: Option<PolicyKind>,

    /// Pending queue bound. The default set {10, 20, 30, 40, 50} runs when
    /// omitted.
    #[arg(long)]
    pub queue_size: Option<NonZeroUsize>,

    /// Synthesize this many uniformly random arrivals instead of reading a
    /// trace file.
    #[arg(long, value_name = "COUNT", conflicts_with = "input")]
    pub generate: Option<NonZeroUsize>,

    /// Seed for the synthetic trace.
    #[arg(long, default_value_t = 0, requires = "generate")]
    pub seed: u64,

    /// Starting head position for a synthetic trace.
    #[arg(long, value_name = "CYLINDER", default_value_t = 0, requires = "generate", value_parser = clap::value_parser!(u32).range(..i64::from(NUM_CYLINDERS)))]
    pub start_head: Cylinder,

    /// Also write the report as ';'-separated CSV to this path.
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Where the arrival trace comes from.
#[derive(Debug, Clone)]
pub enum TraceSource {
    /// Read and parse a trace file.
    File(PathBuf),
    /// Synthesize a reproducible random trace.
    Synthetic { count: NonZeroUsize, seed: u64, start_head: Cylinder },
}

/// Validated configuration value object, built once at process entry and
/// passed down to the experiment driver.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: TraceSource,
    pub algorithm: Option<PolicyKind>,
    pub queue_size: Option<NonZeroUsize>,
    pub csv: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.input, cli.generate) {
            (_, Some(count)) => TraceSource::Synthetic { count, seed: cli.seed, start_head: cli.start_head },
            (Some(path), None) => TraceSource::File(path),
            // clap rejects a command line without a trace source.
            (None, None) => unreachable!("clap enforces that a trace source is present"),
        };

        Config { source, algorithm: cli.algorithm, queue_size: cli.queue_size, csv: cli.csv }
    }
}
