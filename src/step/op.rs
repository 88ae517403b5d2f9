use crate::{
    foundation::core::Annotation,
    model::dataset::{Counters, Dataset},
    step::partition::{self, Probe},
};

/// One atomic, replayable mutation of a [`Dataset`] and its [`Counters`].
///
/// A step holds only the parameters fixed at generation time. Everything data-related is read
/// from the live dataset when [`Step::apply`] runs, except for [`Step::Checkpoint`], which
/// carries the values to install.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Compare `j` with `j + 1` and exchange them if out of order.
    BubbleCompare {
        /// Left index of the pair.
        j: usize,
        /// Start of the suffix already settled by earlier passes.
        settled_from: usize,
    },
    /// Find the minimum of `i..` and move it to `i`.
    SelectMin {
        /// Slot being filled.
        i: usize,
    },
    /// Insert `values[i]` into the sorted prefix `..i`.
    ///
    /// Counts one swap per shift and one comparison per evaluated prefix element, including
    /// the comparison that stops the scan, so comparisons can exceed swaps by one.
    InsertKey {
        /// Index of the key.
        i: usize,
    },
    /// Merge the sorted runs `lo..=mid` and `mid + 1..=hi`.
    MergeRuns {
        /// First index of the left run.
        lo: usize,
        /// Last index of the left run.
        mid: usize,
        /// Last index of the right run.
        hi: usize,
    },
    /// Lomuto-partition `lo..=hi` of the live values.
    Partition {
        /// First index of the range.
        lo: usize,
        /// Last index of the range; its value is the pivot.
        hi: usize,
    },
    /// Install a snapshot taken from a shadow run.
    Checkpoint(Checkpoint),
    /// Tag every index as sorted.
    FinishAll,
}

/// Snapshot payload for [`Step::Checkpoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    /// Values of the shadow array at this point of its trace.
    pub values: Vec<u32>,
    /// Index tagged [`Annotation::Swapping`].
    pub swapping: Option<usize>,
    /// Index tagged [`Annotation::Comparing`].
    pub comparing: Option<usize>,
    /// Start of the suffix tagged [`Annotation::Sorted`].
    pub settled_from: usize,
    /// Comparisons the shadow run performed to reach this snapshot.
    pub comparisons: u64,
    /// Swaps the shadow run performed to reach this snapshot.
    pub swaps: u64,
}

impl Step {
    /// Stable short name of the step kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Step::BubbleCompare { .. } => "bubble_compare",
            Step::SelectMin { .. } => "select_min",
            Step::InsertKey { .. } => "insert_key",
            Step::MergeRuns { .. } => "merge_runs",
            Step::Partition { .. } => "partition",
            Step::Checkpoint(_) => "checkpoint",
            Step::FinishAll => "finish_all",
        }
    }

    /// Execute against the live dataset.
    ///
    /// Every step except [`Step::FinishAll`] first clears the annotation and then tags what it
    /// touched.
    pub fn apply(&self, data: &mut Dataset, counters: &mut Counters) {
        match self {
            Step::BubbleCompare { j, settled_from } => {
                bubble_compare(data, counters, *j, *settled_from)
            }
            Step::SelectMin { i } => select_min(data, counters, *i),
            Step::InsertKey { i } => insert_key(data, counters, *i),
            Step::MergeRuns { lo, mid, hi } => merge_runs(data, counters, *lo, *mid, *hi),
            Step::Partition { lo, hi } => partition_live(data, counters, *lo, *hi),
            Step::Checkpoint(cp) => restore_checkpoint(data, counters, cp),
            Step::FinishAll => data.mark_all_sorted(),
        }
    }
}

fn bubble_compare(data: &mut Dataset, counters: &mut Counters, j: usize, settled_from: usize) {
    let n = data.len();
    debug_assert!(j + 1 < n && settled_from <= n);
    data.clear_annotation();
    data.mark(j, Annotation::Comparing);
    data.mark(j + 1, Annotation::Comparing);
    counters.compared();
    if data.values[j] > data.values[j + 1] {
        data.values.swap(j, j + 1);
        data.mark(j, Annotation::Swapping);
        data.mark(j + 1, Annotation::Swapping);
        counters.swapped();
    }
    data.mark_range(settled_from..n, Annotation::Sorted);
}

fn select_min(data: &mut Dataset, counters: &mut Counters, i: usize) {
    let n = data.len();
    debug_assert!(i < n);
    data.clear_annotation();
    let mut min = i;
    data.mark(i, Annotation::Swapping);
    for j in i + 1..n {
        counters.compared();
        data.mark(j, Annotation::Comparing);
        if data.values[j] < data.values[min] {
            if min != i {
                data.mark(min, Annotation::Default);
            }
            min = j;
            data.mark(min, Annotation::Swapping);
        }
    }
    if min != i {
        data.values.swap(i, min);
        counters.swapped();
    }
    data.mark_range(0..i + 1, Annotation::Sorted);
}

fn insert_key(data: &mut Dataset, counters: &mut Counters, i: usize) {
    debug_assert!(i < data.len());
    data.clear_annotation();
    let key = data.values[i];
    data.mark(i, Annotation::Swapping);
    let mut j = i;
    while j > 0 {
        counters.compared();
        if data.values[j - 1] <= key {
            break;
        }
        data.values[j] = data.values[j - 1];
        data.mark(j, Annotation::Comparing);
        counters.swapped();
        j -= 1;
    }
    data.values[j] = key;
    data.mark(j, Annotation::Swapping);
}

fn merge_runs(data: &mut Dataset, counters: &mut Counters, lo: usize, mid: usize, hi: usize) {
    debug_assert!(lo <= mid && mid < hi && hi < data.len());
    data.clear_annotation();
    let scratch = data.values[lo..=hi].to_vec();
    let (left, right) = scratch.split_at(mid - lo + 1);
    let (mut a, mut b) = (0, 0);
    let mut k = lo;
    while a < left.len() && b < right.len() {
        counters.compared();
        if left[a] <= right[b] {
            data.values[k] = left[a];
            a += 1;
        } else {
            data.values[k] = right[b];
            b += 1;
            counters.swapped();
        }
        k += 1;
    }
    for &v in left[a..].iter().chain(&right[b..]) {
        data.values[k] = v;
        k += 1;
    }
    data.mark_range(lo..hi + 1, Annotation::Swapping);
}

struct LiveProbe<'a> {
    annotation: &'a mut [Annotation],
    counters: &'a mut Counters,
}

impl Probe for LiveProbe<'_> {
    fn compared(&mut self, idx: usize) {
        self.counters.compared();
        self.annotation[idx] = Annotation::Comparing;
    }

    fn exchanged(&mut self, a: usize, _b: usize) {
        self.counters.swapped();
        self.annotation[a] = Annotation::Swapping;
    }

    fn pivot_placed(&mut self, idx: usize) {
        self.annotation[idx] = Annotation::Sorted;
    }
}

fn partition_live(data: &mut Dataset, counters: &mut Counters, lo: usize, hi: usize) {
    debug_assert!(lo < hi && hi < data.len());
    data.clear_annotation();
    data.mark(hi, Annotation::Swapping);
    let Dataset { values, annotation } = data;
    let mut probe = LiveProbe {
        annotation,
        counters,
    };
    partition::lomuto(values, lo, hi, &mut probe);
}

fn restore_checkpoint(data: &mut Dataset, counters: &mut Counters, cp: &Checkpoint) {
    let n = data.len();
    debug_assert_eq!(cp.values.len(), n, "checkpoint generated for another size");
    data.values.copy_from_slice(&cp.values);
    data.clear_annotation();
    if let Some(idx) = cp.comparing {
        data.mark(idx, Annotation::Comparing);
    }
    if let Some(idx) = cp.swapping {
        data.mark(idx, Annotation::Swapping);
    }
    data.mark_range(cp.settled_from.min(n)..n, Annotation::Sorted);
    counters.add(cp.comparisons, cp.swaps);
}

#[cfg(test)]
#[path = "../../tests/unit/step/op.rs"]
mod tests;
