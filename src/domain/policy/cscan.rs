use crate::domain::cost::seek_cost;
use crate::domain::policy::Dispatch;
use crate::domain::queue::PendingQueue;
use crate::domain::request::{Cylinder, NUM_CYLINDERS};

/// Circular scan: requests are serviced in ascending cylinder order only.
///
/// The next request is the smallest pending cylinder at or above the head.
/// When none exists the head sweeps to the top of the disk, jumps back to
/// cylinder 0 and resumes at the smallest pending cylinder, paying the seek
/// cost of all three legs.
pub(super) fn dispatch(pending: &mut PendingQueue, head: Cylinder) -> Option<Dispatch> {
    let ahead = pending
        .iter()
        .enumerate()
        .filter(|(_, request)| request.cylinder >= head)
        .min_by_key(|(_, request)| request.cylinder)
        .map(|(index, _)| index);

    if let Some(index) = ahead {
        let mut request = pending.remove_at(index)?;

        let cost = seek_cost(head, request.cylinder);
        request.accumulated_time += cost;

        return Some(Dispatch { request, cost });
    }

    // Head is past every pending cylinder: wrap around the disk.
    let lowest = pending
        .iter()
        .enumerate()
        .min_by_key(|(_, request)| request.cylinder)
        .map(|(index, _)| index)?;

    let mut request = pending.remove_at(lowest)?;

    let cost = seek_cost(head, NUM_CYLINDERS - 1)
        + seek_cost(NUM_CYLINDERS - 1, 0)
        + seek_cost(0, request.cylinder);
    request.accumulated_time += cost;

    Some(Dispatch { request, cost })
}
