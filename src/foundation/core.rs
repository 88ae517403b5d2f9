use std::{fmt, str::FromStr};

use crate::foundation::error::{SortstepError, SortstepResult};

/// Per-index visual tag, independent of the value stored at that index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// Untouched by the current step.
    #[default]
    Default,
    /// Read by a comparison in the current step.
    Comparing,
    /// Written or exchanged by the current step.
    Swapping,
    /// Known to hold its final value.
    Sorted,
}

/// Playback speed level, always within `1..=10`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Slowest level.
    pub const MIN: SpeedLevel = SpeedLevel(1);
    /// Fastest level.
    pub const MAX: SpeedLevel = SpeedLevel(10);

    /// Validate a raw level.
    pub fn new(level: u8) -> SortstepResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&level) {
            return Err(SortstepError::validation(format!(
                "speed level must be within 1..=10, got {level}"
            )));
        }
        Ok(Self(level))
    }

    /// Raw level in `1..=10`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One level faster, saturating at [`SpeedLevel::MAX`].
    pub fn faster(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One level slower, saturating at [`SpeedLevel::MIN`].
    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN.0))
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for SpeedLevel {
    type Error = SortstepError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<SpeedLevel> for u8 {
    fn from(level: SpeedLevel) -> Self {
        level.0
    }
}

impl fmt::Display for SpeedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exponential mapping from [`SpeedLevel`] to steps executed per tick.
///
/// `steps = round(base ^ ((level - 1) / divisor))`, never below 1. The default curve maps
/// level 1 to 1 step and level 10 to 22 steps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpeedCurve {
    /// Growth factor, `>= 1`.
    pub base: f64,
    /// Levels per factor of `base`, `> 0`.
    pub divisor: f64,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            base: 2.8,
            divisor: 3.0,
        }
    }
}

impl SpeedCurve {
    /// Reject curves that would not be non-decreasing in the level.
    pub fn validate(self) -> SortstepResult<()> {
        if !self.base.is_finite() || self.base < 1.0 {
            return Err(SortstepError::config("speed_curve.base must be finite and >= 1"));
        }
        if !self.divisor.is_finite() || self.divisor <= 0.0 {
            return Err(SortstepError::config("speed_curve.divisor must be finite and > 0"));
        }
        Ok(())
    }

    /// Steps executed per tick at `level`.
    pub fn steps_per_tick(self, level: SpeedLevel) -> usize {
        let exponent = f64::from(level.get() - 1) / self.divisor;
        self.base.powf(exponent).round().max(1.0) as usize
    }
}

/// Array sizes offered to the user.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SizeOption {
    /// 16 elements.
    Tiny,
    /// 32 elements.
    Small,
    /// 64 elements.
    Medium,
    /// 100 elements.
    #[default]
    Large,
    /// 200 elements.
    Huge,
}

impl SizeOption {
    /// All options, smallest first.
    pub const ALL: [SizeOption; 5] = [
        SizeOption::Tiny,
        SizeOption::Small,
        SizeOption::Medium,
        SizeOption::Large,
        SizeOption::Huge,
    ];

    /// Number of elements in the array.
    pub fn count(self) -> usize {
        match self {
            SizeOption::Tiny => 16,
            SizeOption::Small => 32,
            SizeOption::Medium => 64,
            SizeOption::Large => 100,
            SizeOption::Huge => 200,
        }
    }

    /// Lowercase name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SizeOption::Tiny => "tiny",
            SizeOption::Small => "small",
            SizeOption::Medium => "medium",
            SizeOption::Large => "large",
            SizeOption::Huge => "huge",
        }
    }
}

impl FromStr for SizeOption {
    type Err = SortstepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SizeOption::ALL
            .into_iter()
            .find(|opt| opt.name() == needle)
            .ok_or_else(|| SortstepError::validation(format!("unknown size option '{s}'")))
    }
}

impl fmt::Display for SizeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.count())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
