use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Trace source could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed trace entry on line {line}: '{value}' is not a cylinder number")]
    MalformedTrace { line: usize, value: String },

    #[error("Cylinder {cylinder} on line {line} is outside the disk (highest cylinder is {max})", max = crate::domain::request::NUM_CYLINDERS - 1)]
    CylinderOutOfRange { line: usize, cylinder: u64 },

    #[error("Trace contains no requests after the initial head position")]
    EmptyTrace,

    #[error("Unknown scheduling algorithm '{0}' (expected C-SCAN, SSTF or FIFO)")]
    UnknownAlgorithm(String),

    #[error("Failed to write CSV report: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
