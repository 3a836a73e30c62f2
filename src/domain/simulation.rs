use std::num::NonZeroUsize;

use crate::domain::policy::PolicyKind;
use crate::domain::queue::PendingQueue;
use crate::domain::request::{Cylinder, Request};

/// Aggregates of one simulation run.
#[derive(Debug, Clone, Copy)]
pub struct SimulationResult {
    /// Mean finalized accumulated time per arrival, the reported quantity.
    pub mean_completion_time: f64,

    /// Sum of every seek cost the head paid.
    pub total_seek_time: f64,

    /// Number of dispatches. Always equals the number of arrivals.
    pub dispatched: usize,
}

/// Runs `policy` over the arrival sequence with a batch queue of
/// `queue_bound` slots.
///
/// Arrivals enter the pending queue in order. Once the queue is full the
/// policy dispatches one request before the next arrival is admitted; after
/// the last arrival the queue is drained completely. Every admitted arrival
/// also charges all resident requests with the running `total_time`, so a
/// request's accumulated time compounds with the latency of every dispatch
/// that happened while it sat in the queue. The mean of the finalized
/// accumulated times is the reported completion time.
///
/// `arrivals` must not be empty; the loader rejects empty traces before a
/// simulation is ever constructed.
pub fn simulate(policy: PolicyKind, queue_bound: NonZeroUsize, arrivals: &[Cylinder], start_head: Cylinder) -> SimulationResult {
    let mut pending = PendingQueue::new(queue_bound);
    let mut head = start_head;
    let mut total_time = 0.0;
    let mut grand_total = 0.0;
    let mut dispatched = 0;

    for &cylinder in arrivals {
        if pending.is_full() {
            if let Some(dispatch) = policy.dispatch(&mut pending, head) {
                total_time += dispatch.cost;
                head = dispatch.request.cylinder;
                grand_total += dispatch.request.accumulated_time;
                dispatched += 1;
            }
        }

        pending.insert(Request::new(cylinder));
        pending.charge_all(total_time);
    }

    while let Some(dispatch) = policy.dispatch(&mut pending, head) {
        total_time += dispatch.cost;
        head = dispatch.request.cylinder;
        grand_total += dispatch.request.accumulated_time;
        dispatched += 1;
    }

    log::debug!("{} run done: {} dispatches, total seek time {:.2}", policy, dispatched, total_time);

    SimulationResult {
        mean_completion_time: grand_total / arrivals.len() as f64,
        total_seek_time: total_time,
        dispatched,
    }
}
