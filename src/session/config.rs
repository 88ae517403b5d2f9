use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{SizeOption, SpeedCurve, SpeedLevel},
        error::{SortstepError, SortstepResult},
    },
    model::algorithm::Algorithm,
    playback::ClockMode,
};

/// Options for a [`crate::Visualizer`] session.
///
/// Every field has a default, so a JSON document only needs the keys it overrides:
///
/// ```json
/// { "algorithm": "quick", "size": "medium", "speed": 7, "seed": 42 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
    /// Array size selected at startup.
    pub size: SizeOption,
    /// Initial speed level.
    pub speed: SpeedLevel,
    /// Level to steps-per-tick mapping.
    pub speed_curve: SpeedCurve,
    /// How frame time becomes ticks.
    pub clock: ClockMode,
    /// Upper bound on ticks run by one `advance` call under [`ClockMode::Fixed`].
    pub max_ticks_per_advance: u32,
    /// Seed for the permutation source. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            size: SizeOption::default(),
            speed: SpeedLevel::default(),
            speed_curve: SpeedCurve::default(),
            clock: ClockMode::default(),
            max_ticks_per_advance: 8,
            seed: None,
        }
    }
}

impl VisualizerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> SortstepResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| SortstepError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file. IO failures surface as [`SortstepError::Other`].
    pub fn from_json_file(path: &Path) -> SortstepResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check cross-field constraints the types cannot express.
    pub fn validate(&self) -> SortstepResult<()> {
        self.speed_curve.validate()?;
        self.clock.validate()?;
        if self.max_ticks_per_advance == 0 {
            return Err(SortstepError::config("max_ticks_per_advance must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
