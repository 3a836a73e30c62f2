/// A physical track position on the simulated disk, counted from the outer
/// edge.
pub type Cylinder = u32;

/// Number of cylinders on the simulated disk. Valid positions are
/// `0..NUM_CYLINDERS`.
pub const NUM_CYLINDERS: Cylinder = 1024;

/// One pending cylinder access.
///
/// `accumulated_time` starts at zero when the request arrives and only ever
/// grows: every batching step charges the resident requests with the running
/// total of the simulation, and the dispatching policy finally adds the
/// request's own seek cost. The finalized value feeds the reported mean
/// completion time.
#[derive(Debug, Clone)]
pub struct Request {
    pub cylinder: Cylinder,
    pub accumulated_time: f64,
}

impl Request {
    pub fn new(cylinder: Cylinder) -> Self {
        Request { cylinder, accumulated_time: 0.0 }
    }
}
