//! Seek-time cost model shared by all scheduling policies.

use crate::domain::request::Cylinder;

/// Fixed time to accelerate the head out of rest.
pub const SEEK_START_TIME: f64 = 1.0;

/// Travel time per cylinder crossed.
pub const SEEK_TIME_PER_CYLINDER: f64 = 0.15;

/// Fixed time to settle the head on the target track.
pub const SEEK_STOP_TIME: f64 = 1.0;

/// Average wait until the requested sector rotates under the head.
pub const ROTATIONAL_LATENCY: f64 = 4.2;

/// Time to move the head from `start` to `end` and begin servicing.
///
/// Symmetric in its arguments. A zero-distance seek still pays the fixed
/// start, stop and rotational components.
pub fn seek_cost(start: Cylinder, end: Cylinder) -> f64 {
    let distance = start.abs_diff(end) as f64;
    SEEK_START_TIME + distance * SEEK_TIME_PER_CYLINDER + SEEK_STOP_TIME + ROTATIONAL_LATENCY
}
