use crate::step::Step;

pub(super) fn steps(n: usize) -> Vec<Step> {
    (0..n.saturating_sub(1))
        .map(|i| Step::SelectMin { i })
        .collect()
}
