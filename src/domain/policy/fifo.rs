use crate::domain::cost::seek_cost;
use crate::domain::policy::Dispatch;
use crate::domain::queue::PendingQueue;
use crate::domain::request::Cylinder;

/// First-in-first-out: the earliest arrival is serviced next, wherever the
/// head currently sits.
pub(super) fn dispatch(pending: &mut PendingQueue, head: Cylinder) -> Option<Dispatch> {
    let mut request = pending.pop_front()?;

    let cost = seek_cost(head, request.cylinder);
    request.accumulated_time += cost;

    Some(Dispatch { request, cost })
}
