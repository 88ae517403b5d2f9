use crate::step::Step;

/// Bottom-up merge schedule: run widths 1, 2, 4, ... with a ragged tail run.
pub(super) fn steps(n: usize) -> Vec<Step> {
    let mut out = Vec::new();
    let mut width = 1;
    while width < n {
        for lo in (0..n).step_by(2 * width) {
            let mid = (lo + width - 1).min(n - 1);
            let hi = (lo + 2 * width - 1).min(n - 1);
            // Lone run at the tail: nothing to merge with yet.
            if mid >= hi {
                continue;
            }
            out.push(Step::MergeRuns { lo, mid, hi });
        }
        width *= 2;
    }
    out
}
