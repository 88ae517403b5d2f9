use crate::{
    foundation::core::{SpeedCurve, SpeedLevel},
    model::dataset::{Counters, Dataset},
    step::Sequence,
};

/// Lifecycle of one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No sequence materialized.
    #[default]
    Idle,
    /// Sequence materialized, nothing executed, not running.
    Ready,
    /// Executing steps on every tick.
    Running,
    /// Stopped part-way; resumes from the cursor.
    Paused,
    /// Every step executed; terminal until reset.
    Finished,
}

/// Result of a single [`Player::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Steps executed during this tick.
    pub steps: usize,
    /// True only on the tick that executed the final step.
    pub finished: bool,
}

/// Playback controller: owns the sequence, the cursor and the speed.
///
/// The player never holds the dataset; every call that executes steps borrows it explicitly,
/// so the single writer is always the caller's own tick.
#[derive(Clone, Debug)]
pub struct Player {
    sequence: Option<Sequence>,
    cursor: usize,
    speed: SpeedLevel,
    curve: SpeedCurve,
    state: PlaybackState,
}

impl Player {
    /// Idle player at the given speed.
    pub fn new(speed: SpeedLevel, curve: SpeedCurve) -> Self {
        Self {
            sequence: None,
            cursor: 0,
            speed,
            curve,
            state: PlaybackState::Idle,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the next step to execute.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length of the materialized sequence, 0 while idle.
    pub fn sequence_len(&self) -> usize {
        self.sequence.as_ref().map_or(0, Sequence::len)
    }

    /// The materialized sequence, if any.
    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    /// Current speed level.
    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    /// Takes effect from the next tick.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
    }

    /// Steps executed per tick at the current speed.
    pub fn steps_per_tick(&self) -> usize {
        self.curve.steps_per_tick(self.speed)
    }

    /// True while in [`PlaybackState::Running`].
    pub fn is_running(&self) -> bool {
        self.state == PlaybackState::Running
    }

    /// True once every step has executed.
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Materialize the sequence if idle (`Idle -> Ready`).
    ///
    /// Counters are zeroed and annotations cleared right before `generate` runs against the
    /// current values. Returns false when a sequence was already loaded.
    pub fn load(
        &mut self,
        data: &mut Dataset,
        counters: &mut Counters,
        generate: impl FnOnce(&[u32]) -> Sequence,
    ) -> bool {
        if self.state != PlaybackState::Idle {
            return false;
        }
        counters.reset();
        data.clear_annotation();
        let sequence = generate(data.values());
        debug_assert_eq!(sequence.size(), data.len());
        tracing::debug!(
            algorithm = ?sequence.algorithm(),
            steps = sequence.len(),
            "player loaded sequence"
        );
        self.sequence = Some(sequence);
        self.cursor = 0;
        self.state = PlaybackState::Ready;
        true
    }

    /// Start or resume. Loads the sequence first when idle.
    ///
    /// Returns true when the player entered [`PlaybackState::Running`]. An empty sequence
    /// finishes immediately instead.
    pub fn play(
        &mut self,
        data: &mut Dataset,
        counters: &mut Counters,
        generate: impl FnOnce(&[u32]) -> Sequence,
    ) -> bool {
        self.load(data, counters, generate);
        match self.state {
            PlaybackState::Ready | PlaybackState::Paused => {
                if self.cursor == self.sequence_len() {
                    self.finish(data);
                    return false;
                }
                tracing::debug!(cursor = self.cursor, "player running");
                self.state = PlaybackState::Running;
                true
            }
            PlaybackState::Idle | PlaybackState::Running | PlaybackState::Finished => false,
        }
    }

    /// `Running -> Paused` (or `Ready` when nothing has executed yet); no-op otherwise.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.state = if self.cursor == 0 {
            PlaybackState::Ready
        } else {
            PlaybackState::Paused
        };
        tracing::debug!(cursor = self.cursor, "player paused");
        true
    }

    /// Execute up to [`Player::steps_per_tick`] steps in order.
    ///
    /// Only effective while running. When the cursor reaches the end, every index is tagged
    /// sorted and the player becomes [`PlaybackState::Finished`].
    pub fn tick(&mut self, data: &mut Dataset, counters: &mut Counters) -> TickOutcome {
        if self.state != PlaybackState::Running {
            return TickOutcome::default();
        }
        let Some(sequence) = self.sequence.as_ref() else {
            return TickOutcome::default();
        };
        debug_assert_eq!(sequence.size(), data.len(), "sequence generated for another size");

        let start = self.cursor;
        let end = start
            .saturating_add(self.curve.steps_per_tick(self.speed))
            .min(sequence.len());
        for step in &sequence.steps()[start..end] {
            step.apply(data, counters);
        }
        let done = end == sequence.len();
        self.cursor = end;
        tracing::trace!(steps = end - start, cursor = end, "tick");

        if done {
            self.finish(data);
        }
        TickOutcome {
            steps: end - start,
            finished: done,
        }
    }

    /// Discard the sequence (`* -> Idle`).
    pub fn reset(&mut self) {
        if self.state != PlaybackState::Idle {
            tracing::debug!(state = ?self.state, cursor = self.cursor, "player reset");
        }
        self.sequence = None;
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }

    fn finish(&mut self, data: &mut Dataset) {
        data.mark_all_sorted();
        self.state = PlaybackState::Finished;
        tracing::debug!(steps = self.cursor, "player finished");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
