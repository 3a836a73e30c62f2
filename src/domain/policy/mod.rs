//! Dispatch policies for the pending request queue.
//!
//! All three policies share one contract: given the pending queue and the
//! current head position they remove exactly one request, add the seek cost
//! incurred to reach it to the request's accumulated time and hand both back
//! to the simulation loop. An empty queue yields `None`, which callers treat
//! as "nothing to do" rather than an error; dispatching a non-empty queue
//! always succeeds.

mod cscan;
mod fifo;
mod sstf;


use std::fmt;
use std::str::FromStr;

use crate::domain::queue::PendingQueue;
use crate::domain::request::{Cylinder, Request};
use crate::error::Error;

/// Outcome of a successful dispatch: the serviced request with its
/// accumulated time finalized, and the seek cost the head just paid.
#[derive(Debug)]
pub struct Dispatch {
    pub request: Request,
    pub cost: f64,
}

/// The closed set of scheduling algorithms the simulator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    CScan,
    Sstf,
    Fifo,
}

impl PolicyKind {
    /// Every policy, in reporting order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::CScan, PolicyKind::Sstf, PolicyKind::Fifo];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::CScan => "C-SCAN",
            PolicyKind::Sstf => "SSTF",
            PolicyKind::Fifo => "FIFO",
        }
    }

    /// Selects and removes one request from `pending`.
    ///
    /// Returns `None` iff the queue is empty.
    pub fn dispatch(&self, pending: &mut PendingQueue, head: Cylinder) -> Option<Dispatch> {
        match self {
            PolicyKind::CScan => cscan::dispatch(pending, head),
            PolicyKind::Sstf => sstf::dispatch(pending, head),
            PolicyKind::Fifo => fifo::dispatch(pending, head),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    /// Case-insensitive lookup. An unrecognized name is a configuration
    /// error, not an empty experiment.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "C-SCAN" | "CSCAN" => Ok(PolicyKind::CScan),
            "SSTF" => Ok(PolicyKind::Sstf),
            "FIFO" => Ok(PolicyKind::Fifo),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
