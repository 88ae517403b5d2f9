use crate::step::Step;

pub(super) fn steps(n: usize) -> Vec<Step> {
    let mut out = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            out.push(Step::BubbleCompare {
                j,
                settled_from: n - pass,
            });
        }
    }
    out
}
