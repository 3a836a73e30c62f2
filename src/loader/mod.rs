pub mod generator;
pub mod parser;

pub use parser::Trace;

use crate::config::TraceSource;
use crate::error::Result;

/// Obtains the arrival trace named by the configuration.
pub fn load_trace(source: &TraceSource) -> Result<Trace> {
    match source {
        TraceSource::File(path) => parser::parse_trace_file(path),
        TraceSource::Synthetic { count, seed, start_head } => Ok(generator::synthesize(*count, *seed, *start_head)),
    }
}
