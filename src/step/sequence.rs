use std::collections::BTreeMap;

use crate::{model::algorithm::Algorithm, step::op::Step};

/// The fully materialized, ordered list of steps for one `(algorithm, size)` run.
///
/// A sequence is only valid for the permutation it was generated against; it is discarded
/// whenever the algorithm, size or permutation changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    algorithm: Algorithm,
    size: usize,
    steps: Vec<Step>,
}

impl Sequence {
    pub(crate) fn new(algorithm: Algorithm, size: usize, steps: Vec<Step>) -> Self {
        Self {
            algorithm,
            size,
            steps,
        }
    }

    /// Algorithm the steps were generated for.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Dataset length the step indices refer to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when there is nothing to replay.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at `idx`, in execution order.
    pub fn get(&self, idx: usize) -> Option<&Step> {
        self.steps.get(idx)
    }

    /// All steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Count of steps per [`Step::kind`].
    pub fn histogram(&self) -> BTreeMap<&'static str, usize> {
        let mut out = BTreeMap::new();
        for step in &self.steps {
            *out.entry(step.kind()).or_insert(0) += 1;
        }
        out
    }
}
