use std::num::NonZeroUsize;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::request::{Cylinder, NUM_CYLINDERS};
use crate::loader::parser::Trace;

/// Synthesizes a uniformly random arrival trace.
///
/// The same seed always yields the same trace, so experiment runs stay
/// reproducible.
pub fn synthesize(count: NonZeroUsize, seed: u64, start_head: Cylinder) -> Trace {
    let mut rng = StdRng::seed_from_u64(seed);

    let arrivals = (0..count.get()).map(|_| rng.random_range(0..NUM_CYLINDERS)).collect();

    Trace { start_head, arrivals }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("test counts are positive")
    }

    #[test]
    fn same_seed_yields_the_same_trace() {
        let first = synthesize(count(64), 42, 100);
        let second = synthesize(count(64), 42, 100);

        assert_eq!(first.arrivals, second.arrivals);
        assert_eq!(first.start_head, 100);
    }

    #[test]
    fn arrivals_stay_on_the_disk() {
        let trace = synthesize(count(256), 7, 0);

        assert_eq!(trace.arrivals.len(), 256);
        assert!(trace.arrivals.iter().all(|&cylinder| cylinder < NUM_CYLINDERS));
    }
}
