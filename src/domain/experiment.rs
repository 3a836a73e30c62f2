use std::num::NonZeroUsize;

use crate::domain::policy::PolicyKind;
use crate::domain::simulation::simulate;
use crate::loader::parser::Trace;

/// Queue bounds exercised when no explicit size is configured.
pub const DEFAULT_QUEUE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// One (policy, queue bound) data point of the report.
#[derive(Debug, Clone)]
pub struct ExperimentRow {
    pub policy: PolicyKind,
    pub queue_bound: NonZeroUsize,
    pub mean_completion_time: f64,
}

/// Cross product of policies and queue bounds to simulate.
#[derive(Debug, Clone)]
pub struct Experiment {
    policies: Vec<PolicyKind>,
    queue_bounds: Vec<NonZeroUsize>,
}

impl Experiment {
    /// An experiment over the selected policy (or all of them) and the
    /// selected queue bound (or the default set).
    pub fn new(algorithm: Option<PolicyKind>, queue_size: Option<NonZeroUsize>) -> Self {
        let policies = match algorithm {
            Some(kind) => vec![kind],
            None => PolicyKind::ALL.to_vec(),
        };

        let queue_bounds = match queue_size {
            Some(bound) => vec![bound],
            None => DEFAULT_QUEUE_SIZES.iter().copied().filter_map(NonZeroUsize::new).collect(),
        };

        Experiment { policies, queue_bounds }
    }

    /// Runs every combination against the trace and collects the report rows
    /// in iteration order. Each run starts from a fresh queue and head, so
    /// combinations are fully independent of each other.
    pub fn run(&self, trace: &Trace) -> Vec<ExperimentRow> {
        let mut rows = Vec::with_capacity(self.policies.len() * self.queue_bounds.len());

        for &policy in &self.policies {
            log::info!("Running {} over {} arrivals.", policy, trace.arrivals.len());

            for &queue_bound in &self.queue_bounds {
                let result = simulate(policy, queue_bound, &trace.arrivals, trace.start_head);

                log::debug!("{} with queue bound {}: mean completion time {:.4}", policy, queue_bound, result.mean_completion_time);

                rows.push(ExperimentRow { policy, queue_bound, mean_completion_time: result.mean_completion_time });
            }
        }

        rows
    }
}
