use std::fs;
use std::path::Path;

use crate::domain::request::{Cylinder, NUM_CYLINDERS};
use crate::error::{Error, Result};

/// A parsed arrival trace: the initial head position followed by the ordered
/// cylinder requests.
#[derive(Debug, Clone)]
pub struct Trace {
    pub start_head: Cylinder,
    pub arrivals: Vec<Cylinder>,
}

/// Parses a trace file with one integer per line.
///
/// The first value is the starting head position, all subsequent values are
/// the ordered arrival sequence.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::MalformedTrace` for non-integer content, naming the line.
/// - `Error::CylinderOutOfRange` for cylinders beyond the disk.
/// - `Error::EmptyTrace` if no arrivals remain after the head line.
pub fn parse_trace_file(path: impl AsRef<Path>) -> Result<Trace> {
    let data = fs::read_to_string(path)?;

    parse_trace(&data)
}

/// Parses trace content that has already been read into memory.
pub fn parse_trace(data: &str) -> Result<Trace> {
    let mut values = Vec::new();

    for (idx, line) in data.lines().enumerate() {
        let trimmed = line.trim();

        let raw: u64 = trimmed.parse().map_err(|_| Error::MalformedTrace { line: idx + 1, value: trimmed.to_string() })?;

        if raw >= u64::from(NUM_CYLINDERS) {
            return Err(Error::CylinderOutOfRange { line: idx + 1, cylinder: raw });
        }

        values.push(raw as Cylinder);
    }

    let mut values = values.into_iter();

    let Some(start_head) = values.next() else {
        return Err(Error::EmptyTrace);
    };

    let arrivals: Vec<Cylinder> = values.collect();
    if arrivals.is_empty() {
        return Err(Error::EmptyTrace);
    }

    Ok(Trace { start_head, arrivals })
}
