use crate::step::{
    Step,
    partition::{self, Silent},
};

pub(super) fn steps(values: &[u32]) -> Vec<Step> {
    steps_with_trace(values, |_| {})
}

/// Run quicksort on a shadow copy, emitting one [`Step::Partition`] per partitioned range.
///
/// `observe` sees the shadow values right after each emitted partition. Because the live
/// replay runs the same [`partition::lomuto`] on identical inputs, the live values after the
/// k-th step equal the k-th observed shadow state.
pub(super) fn steps_with_trace(values: &[u32], mut observe: impl FnMut(&[u32])) -> Vec<Step> {
    let mut shadow = values.to_vec();
    let mut out = Vec::new();
    let mut work = Vec::new();
    if shadow.len() > 1 {
        work.push((0, shadow.len() - 1));
    }
    while let Some((lo, hi)) = work.pop() {
        out.push(Step::Partition { lo, hi });
        let p = partition::lomuto(&mut shadow, lo, hi, &mut Silent);
        observe(&shadow);
        if p > lo + 1 {
            work.push((lo, p - 1));
        }
        if p + 1 < hi {
            work.push((p + 1, hi));
        }
    }
    out
}
