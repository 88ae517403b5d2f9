use std::{fmt, str::FromStr};

use crate::foundation::error::{SortstepError, SortstepResult};

/// The sorting algorithms the engine can replay.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive adjacent-pair passes.
    #[default]
    Bubble,
    /// Minimum selection into a growing sorted prefix.
    Selection,
    /// Key insertion by shifting larger elements right.
    Insertion,
    /// Bottom-up merge with doubling run widths.
    Merge,
    /// Lomuto-partition quicksort with the last element as pivot.
    Quick,
    /// Max-heap build followed by repeated root extraction.
    Heap,
}

impl Algorithm {
    /// All algorithms in selection order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Algorithm at position `idx` of [`Algorithm::ALL`].
    pub fn from_index(idx: usize) -> SortstepResult<Self> {
        Self::ALL.get(idx).copied().ok_or_else(|| {
            SortstepError::validation(format!("algorithm index must be within 0..6, got {idx}"))
        })
    }

    /// Short lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Typical time complexity label.
    pub fn complexity(self) -> &'static str {
        match self {
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => "O(n²)",
            Algorithm::Merge | Algorithm::Quick | Algorithm::Heap => "O(n log n)",
        }
    }

    /// True when the step schedule depends on the values, not just the length.
    pub fn is_data_dependent(self) -> bool {
        matches!(self, Algorithm::Quick | Algorithm::Heap)
    }
}

impl FromStr for Algorithm {
    type Err = SortstepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == needle)
            .ok_or_else(|| SortstepError::validation(format!("unknown algorithm '{s}'")))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
