use crate::domain::cost::seek_cost;
use crate::domain::policy::Dispatch;
use crate::domain::queue::PendingQueue;
use crate::domain::request::Cylinder;

/// Shortest seek time first: services the pending request closest to the
/// head. Distance ties resolve to the earliest-inserted request
/// (`min_by_key` keeps the first minimum), so runs are deterministic.
pub(super) fn dispatch(pending: &mut PendingQueue, head: Cylinder) -> Option<Dispatch> {
    let closest = pending
        .iter()
        .enumerate()
        .min_by_key(|(_, request)| request.cylinder.abs_diff(head))
        .map(|(index, _)| index)?;

    let mut request = pending.remove_at(closest)?;

    let cost = seek_cost(head, request.cylinder);
    request.accumulated_time += cost;

    Some(Dispatch { request, cost })
}
