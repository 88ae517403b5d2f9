use crate::step::{Checkpoint, Step};

pub(super) fn steps(values: &[u32]) -> Vec<Step> {
    let mut shadow = Shadow {
        values: values.to_vec(),
        out: Vec::new(),
        comparisons: 0,
        swaps: 0,
    };
    let n = shadow.values.len();

    for root in (0..n / 2).rev() {
        shadow.sift_down(n, root, n);
        shadow.checkpoint(None, None, n);
    }

    for end in (1..n).rev() {
        shadow.values.swap(0, end);
        shadow.swaps += 1;
        shadow.checkpoint(Some(0), None, end);
        shadow.sift_down(end, 0, end);
        shadow.checkpoint(None, None, end);
    }

    debug_assert_eq!((shadow.comparisons, shadow.swaps), (0, 0));
    shadow.out
}

/// Heapsort running on a private copy, recording a checkpoint after every exchange.
///
/// `comparisons`/`swaps` hold the work done since the last checkpoint; each checkpoint takes
/// them so the live counters advance when the step replays, not at generation time.
struct Shadow {
    values: Vec<u32>,
    out: Vec<Step>,
    comparisons: u64,
    swaps: u64,
}

impl Shadow {
    fn sift_down(&mut self, heap_len: usize, mut root: usize, settled_from: usize) {
        loop {
            let left = 2 * root + 1;
            if left >= heap_len {
                break;
            }
            let mut largest = root;
            self.comparisons += 1;
            if self.values[left] > self.values[largest] {
                largest = left;
            }
            let right = left + 1;
            if right < heap_len {
                self.comparisons += 1;
                if self.values[right] > self.values[largest] {
                    largest = right;
                }
            }
            if largest == root {
                break;
            }
            self.values.swap(root, largest);
            self.swaps += 1;
            self.checkpoint(Some(root), Some(largest), settled_from);
            root = largest;
        }
    }

    fn checkpoint(
        &mut self,
        swapping: Option<usize>,
        comparing: Option<usize>,
        settled_from: usize,
    ) {
        self.out.push(Step::Checkpoint(Checkpoint {
            values: self.values.clone(),
            swapping,
            comparing,
            settled_from,
            comparisons: std::mem::take(&mut self.comparisons),
            swaps: std::mem::take(&mut self.swaps),
        }));
    }
}
