use crate::step::Step;

pub(super) fn steps(n: usize) -> Vec<Step> {
    (1..n).map(|i| Step::InsertKey { i }).collect()
}
