use std::ops::Range;

use rand::{Rng, seq::SliceRandom};

use crate::foundation::{
    core::Annotation,
    error::{SortstepError, SortstepResult},
};

/// The permutation under sort plus its per-index annotation.
///
/// `values` always holds some permutation of `1..=len` between steps. The dataset never checks
/// sortedness itself; that is guaranteed by the step sequences replayed against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub(crate) values: Vec<u32>,
    pub(crate) annotation: Vec<Annotation>,
}

impl Dataset {
    /// A uniformly random permutation of `1..=size`.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut out = Self::default();
        out.reset(size, rng);
        out
    }

    /// Adopt an explicit permutation of `1..=n`.
    pub fn from_permutation(values: Vec<u32>) -> SortstepResult<Self> {
        let n = values.len();
        let mut seen = vec![false; n];
        for &v in &values {
            let slot = usize::try_from(v)
                .ok()
                .and_then(|v| v.checked_sub(1))
                .filter(|&i| i < n)
                .ok_or_else(|| {
                    SortstepError::validation(format!("value {v} is outside 1..={n}"))
                })?;
            if std::mem::replace(&mut seen[slot], true) {
                return Err(SortstepError::validation(format!("value {v} appears twice")));
            }
        }
        Ok(Self {
            annotation: vec![Annotation::Default; n],
            values,
        })
    }

    /// Replace the contents with a fresh random permutation of `1..=size`.
    pub fn reset<R: Rng + ?Sized>(&mut self, size: usize, rng: &mut R) {
        let upper = u32::try_from(size).unwrap_or(u32::MAX);
        self.values.clear();
        self.values.extend(1..=upper);
        self.values.shuffle(rng);
        self.annotation.clear();
        self.annotation.resize(self.values.len(), Annotation::Default);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for the zero-length dataset.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current values, index-aligned with [`Dataset::annotation`].
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Current per-index tags.
    pub fn annotation(&self) -> &[Annotation] {
        &self.annotation
    }

    pub(crate) fn clear_annotation(&mut self) {
        self.annotation.fill(Annotation::Default);
    }

    pub(crate) fn mark(&mut self, idx: usize, tag: Annotation) {
        self.annotation[idx] = tag;
    }

    pub(crate) fn mark_range(&mut self, range: Range<usize>, tag: Annotation) {
        self.annotation[range].fill(tag);
    }

    pub(crate) fn mark_all_sorted(&mut self) {
        self.annotation.fill(Annotation::Sorted);
    }
}

/// Comparison and swap tallies for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Counters {
    comparisons: u64,
    swaps: u64,
}

impl Counters {
    /// Comparisons performed so far in this run.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps (or shifting writes) performed so far in this run.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub(crate) fn compared(&mut self) {
        self.comparisons += 1;
    }

    pub(crate) fn swapped(&mut self) {
        self.swaps += 1;
    }

    pub(crate) fn add(&mut self, comparisons: u64, swaps: u64) {
        self.comparisons += comparisons;
        self.swaps += swaps;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/dataset.rs"]
mod tests;
