//! Report output: console summary and optional CSV export.

use std::path::Path;

use serde::Serialize;

use crate::domain::experiment::ExperimentRow;
use crate::domain::policy::PolicyKind;
use crate::error::Result;

/// One CSV line of the exported report. The field order defines the column
/// order.
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    algorithm: &'a str,
    queue_size: usize,
    mean_completion_time: f64,
}

/// Prints the report to stdout: one block per policy, one row per queue
/// bound tested.
pub fn print_summary(rows: &[ExperimentRow]) {
    let mut current: Option<PolicyKind> = None;

    for row in rows {
        if current != Some(row.policy) {
            println!("Algorithm: {}", row.policy);
            println!("Queue Size, Average Time");
            current = Some(row.policy);
        }

        println!(" {}, {}", row.queue_bound, row.mean_completion_time);
    }
}

/// Writes the report as ';'-separated CSV with a header row.
pub fn write_csv(path: impl AsRef<Path>, rows: &[ExperimentRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path.as_ref())?;

    for row in rows {
        writer.serialize(ResultRecord {
            algorithm: row.policy.name(),
            queue_size: row.queue_bound.get(),
            mean_completion_time: row.mean_completion_time,
        })?;
    }

    writer.flush()?;

    Ok(())
}
