//! Sequence generators.
//!
//! Bubble, selection, insertion and merge visit a schedule that depends only on the length, so
//! their steps carry indices and decide everything against the live values at replay time.
//! Quicksort and heapsort discover their schedule by sorting a private shadow copy first:
//! quicksort replays each discovered partition range against the live values, heapsort
//! installs the shadow's snapshots verbatim.

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::{
    model::algorithm::Algorithm,
    step::{Sequence, Step},
};

/// Materialize the full step sequence for `algorithm` against the current `values`.
///
/// The returned sequence always ends with [`Step::FinishAll`]. Replaying it in order on a
/// dataset holding exactly `values` leaves the values sorted ascending.
#[tracing::instrument(skip(values), fields(size = values.len()))]
pub fn generate(algorithm: Algorithm, values: &[u32]) -> Sequence {
    let n = values.len();
    let mut steps = match algorithm {
        Algorithm::Bubble => bubble::steps(n),
        Algorithm::Selection => selection::steps(n),
        Algorithm::Insertion => insertion::steps(n),
        Algorithm::Merge => merge::steps(n),
        Algorithm::Quick => quick::steps(values),
        Algorithm::Heap => heap::steps(values),
    };
    steps.push(Step::FinishAll);
    tracing::debug!(steps = steps.len(), "sequence generated");
    Sequence::new(algorithm, n, steps)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/mod.rs"]
mod tests;
