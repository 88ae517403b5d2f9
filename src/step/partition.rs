//! Lomuto partition shared by the quicksort shadow run and its live replay.
//!
//! Both callers must execute the exact same exchanges for equal inputs; the only difference
//! between them is the [`Probe`] observing the run.

/// Observer for the comparisons and exchanges performed by a kernel.
pub(crate) trait Probe {
    fn compared(&mut self, _idx: usize) {}

    /// Called after `a` and `b` were exchanged. Never called with `a == b`; self-exchanges are
    /// skipped, while the final pivot placement is reported like any other exchange.
    fn exchanged(&mut self, _a: usize, _b: usize) {}

    fn pivot_placed(&mut self, _idx: usize) {}
}

/// Probe that observes nothing; used for shadow runs.
pub(crate) struct Silent;

impl Probe for Silent {}

/// Partition `values[lo..=hi]` around the pivot `values[hi]`.
///
/// Returns the pivot's final index. Elements `<=` pivot end up to its left.
pub(crate) fn lomuto<P: Probe + ?Sized>(
    values: &mut [u32],
    lo: usize,
    hi: usize,
    probe: &mut P,
) -> usize {
    debug_assert!(lo < hi && hi < values.len());
    let pivot = values[hi];
    // Next slot for an element <= pivot.
    let mut store = lo;
    for j in lo..hi {
        probe.compared(j);
        if values[j] <= pivot {
            if store != j {
                values.swap(store, j);
                probe.exchanged(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        values.swap(store, hi);
        probe.exchanged(store, hi);
    }
    probe.pivot_placed(store);
    store
}

#[cfg(test)]
#[path = "../../tests/unit/step/partition.rs"]
mod tests;
