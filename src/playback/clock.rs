use crate::foundation::error::{SortstepError, SortstepResult};

/// How [`crate::Visualizer::advance`] turns frame time into ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ClockMode {
    /// Exactly one tick per `advance` call, whatever the frame time.
    #[default]
    PerFrame,
    /// Ticks at a fixed rate, independent of the frame rate.
    Fixed {
        /// Ticks per second.
        hz: f64,
    },
}

impl ClockMode {
    /// Reject non-positive or non-finite rates.
    pub fn validate(self) -> SortstepResult<()> {
        match self {
            ClockMode::PerFrame => Ok(()),
            ClockMode::Fixed { hz } if hz.is_finite() && hz > 0.0 => Ok(()),
            ClockMode::Fixed { hz } => Err(SortstepError::config(format!(
                "clock.hz must be finite and > 0, got {hz}"
            ))),
        }
    }
}

/// Frame-time accumulator for [`ClockMode::Fixed`].
#[derive(Clone, Debug)]
pub(crate) struct Clock {
    mode: ClockMode,
    max_ticks: u32,
    pending_secs: f64,
}

impl Clock {
    pub(crate) fn new(mode: ClockMode, max_ticks: u32) -> Self {
        Self {
            mode,
            max_ticks,
            pending_secs: 0.0,
        }
    }

    /// Ticks due after `dt` seconds. Time owed beyond `max_ticks` is dropped, not carried.
    pub(crate) fn ticks_due(&mut self, dt: f64) -> u32 {
        match self.mode {
            ClockMode::PerFrame => 1,
            ClockMode::Fixed { hz } => {
                if dt.is_finite() && dt > 0.0 {
                    self.pending_secs += dt;
                }
                let due = (self.pending_secs * hz).floor();
                self.pending_secs = (self.pending_secs - due / hz).max(0.0);
                due.min(f64::from(self.max_ticks)) as u32
            }
        }
    }

    pub(crate) fn reset(&mut self) {
        self.pending_secs = 0.0;
    }
}
