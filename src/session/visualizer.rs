use rand::{SeedableRng, rngs::StdRng};

use crate::{
    foundation::{
        core::{Annotation, SizeOption, SpeedLevel},
        error::SortstepResult,
    },
    generate::generate,
    model::{
        algorithm::Algorithm,
        dataset::{Counters, Dataset},
    },
    playback::{PlaybackState, Player, clock::Clock},
    session::config::VisualizerConfig,
};

/// Notifications for the rendering layer, drained with [`Visualizer::drain_events`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackEvent {
    /// Playback started or resumed.
    Started,
    /// Playback paused by a command.
    Paused,
    /// The last step executed; every index is now tagged sorted.
    Finished,
    /// The dataset was reshuffled and the sequence discarded.
    Reset,
}

/// Coarse status for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// The run completed.
    Sorted,
    /// Steps are executing.
    Running,
    /// Anything else: idle, ready or paused.
    Paused,
}

impl Status {
    /// Upper-case label.
    pub fn label(self) -> &'static str {
        match self {
            Status::Sorted => "SORTED",
            Status::Running => "RUNNING",
            Status::Paused => "PAUSED",
        }
    }
}

/// What one [`Visualizer::advance`] call did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvanceReport {
    /// Ticks run.
    pub ticks: u32,
    /// Steps executed across those ticks.
    pub steps: usize,
}

/// Read-only copy of everything a renderer consumes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Snapshot {
    /// Active algorithm.
    pub algorithm: Algorithm,
    /// Dataset length.
    pub size: usize,
    /// Current values.
    pub values: Vec<u32>,
    /// Current per-index tags.
    pub annotation: Vec<Annotation>,
    /// Comparisons so far.
    pub comparisons: u64,
    /// Swaps so far.
    pub swaps: u64,
    /// Materialized sequence length, 0 while idle.
    pub sequence_len: usize,
    /// Index of the next step.
    pub cursor: usize,
    /// Speed level.
    pub speed: SpeedLevel,
    /// True while running.
    pub running: bool,
    /// True once the run completed.
    pub finished: bool,
    /// Display status.
    pub status: Status,
}

/// One interactive session: a dataset, its counters and the player replaying steps over it.
///
/// This is the surface the window/input layer drives: commands map one-to-one to user
/// actions, and [`Visualizer::advance`] is called once per rendered frame. Every command that
/// invalidates the sequence (shuffle, algorithm or size change) pauses first and then resets.
pub struct Visualizer {
    algorithm: Algorithm,
    size: SizeOption,
    dataset: Dataset,
    counters: Counters,
    player: Player,
    clock: Clock,
    rng: StdRng,
    events: Vec<PlaybackEvent>,
}

impl Visualizer {
    /// Start a session with a fresh random permutation.
    pub fn new(config: VisualizerConfig) -> SortstepResult<Self> {
        config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let dataset = Dataset::shuffled(config.size.count(), &mut rng);
        tracing::debug!(
            algorithm = ?config.algorithm,
            size = config.size.count(),
            seed = ?config.seed,
            "visualizer created"
        );
        Ok(Self {
            algorithm: config.algorithm,
            size: config.size,
            dataset,
            counters: Counters::default(),
            player: Player::new(config.speed, config.speed_curve),
            clock: Clock::new(config.clock, config.max_ticks_per_advance),
            rng,
            events: Vec::new(),
        })
    }

    /// Start a session on an explicit permutation of `1..=n`.
    ///
    /// `n` need not match `config.size`; the next reshuffle returns to the configured size.
    pub fn with_permutation(config: VisualizerConfig, values: Vec<u32>) -> SortstepResult<Self> {
        let dataset = Dataset::from_permutation(values)?;
        let mut out = Self::new(config)?;
        out.dataset = dataset;
        Ok(out)
    }

    /// Active algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Selected size option.
    pub fn size(&self) -> SizeOption {
        self.size
    }

    /// Live dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Live values.
    pub fn values(&self) -> &[u32] {
        self.dataset.values()
    }

    /// Live annotation.
    pub fn annotation(&self) -> &[Annotation] {
        self.dataset.annotation()
    }

    /// Counters of the current run.
    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Playback controller.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Speed level.
    pub fn speed(&self) -> SpeedLevel {
        self.player.speed()
    }

    /// True while steps are executing.
    pub fn is_running(&self) -> bool {
        self.player.is_running()
    }

    /// True once the current run completed.
    ///
    /// The dataset is never checked independently; completion of a generated sequence is what
    /// makes it sorted.
    pub fn is_sorted(&self) -> bool {
        self.player.is_finished()
    }

    /// Display status.
    pub fn status(&self) -> Status {
        match self.player.state() {
            PlaybackState::Finished => Status::Sorted,
            PlaybackState::Running => Status::Running,
            PlaybackState::Idle | PlaybackState::Ready | PlaybackState::Paused => Status::Paused,
        }
    }

    /// Switch algorithm. Always reshuffles, even when re-selecting the active one.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.reset();
    }

    /// Fresh permutation, counters zeroed, sequence discarded.
    pub fn shuffle(&mut self) {
        self.reset();
    }

    /// Change size. Pauses first when running, then resets.
    pub fn set_size(&mut self, size: SizeOption) {
        self.size = size;
        self.reset();
    }

    /// Change speed; takes effect from the next tick.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.player.set_speed(speed);
    }

    /// One level faster, saturating.
    pub fn faster(&mut self) {
        self.set_speed(self.speed().faster());
    }

    /// One level slower, saturating.
    pub fn slower(&mut self) {
        self.set_speed(self.speed().slower());
    }

    /// Start or resume, generating the sequence on first play. No-op on a finished run.
    pub fn play(&mut self) {
        if self.player.is_finished() {
            return;
        }
        let algorithm = self.algorithm;
        let started = self.player.play(&mut self.dataset, &mut self.counters, |values| {
            generate(algorithm, values)
        });
        if started {
            self.events.push(PlaybackEvent::Started);
        } else if self.player.is_finished() {
            self.on_finished();
        }
    }

    /// Pause if running.
    pub fn pause(&mut self) {
        if self.player.pause() {
            self.events.push(PlaybackEvent::Paused);
        }
    }

    /// Pause when running, play otherwise. A finished run reshuffles instead.
    pub fn toggle_play_pause(&mut self) {
        match self.player.state() {
            PlaybackState::Finished => self.shuffle(),
            PlaybackState::Running => self.pause(),
            PlaybackState::Idle | PlaybackState::Ready | PlaybackState::Paused => self.play(),
        }
    }

    /// Per-frame entry point: runs the ticks the clock says are due while running.
    pub fn advance(&mut self, dt: f64) -> AdvanceReport {
        if !self.player.is_running() {
            return AdvanceReport::default();
        }
        let due = self.clock.ticks_due(dt);
        let mut report = AdvanceReport::default();
        for _ in 0..due {
            let outcome = self.player.tick(&mut self.dataset, &mut self.counters);
            report.ticks += 1;
            report.steps += outcome.steps;
            if outcome.finished {
                self.on_finished();
                break;
            }
        }
        report
    }

    /// Take the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Owned copy of the renderer-facing state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            algorithm: self.algorithm,
            size: self.dataset.len(),
            values: self.dataset.values().to_vec(),
            annotation: self.dataset.annotation().to_vec(),
            comparisons: self.counters.comparisons(),
            swaps: self.counters.swaps(),
            sequence_len: self.player.sequence_len(),
            cursor: self.player.cursor(),
            speed: self.player.speed(),
            running: self.player.is_running(),
            finished: self.player.is_finished(),
            status: self.status(),
        }
    }

    fn reset(&mut self) {
        // Never reshuffle underneath a running sequence.
        self.player.pause();
        self.player.reset();
        self.dataset.reset(self.size.count(), &mut self.rng);
        self.counters.reset();
        self.clock.reset();
        self.events.push(PlaybackEvent::Reset);
        tracing::debug!(
            algorithm = ?self.algorithm,
            size = self.size.count(),
            "visualizer reset"
        );
    }

    fn on_finished(&mut self) {
        self.events.push(PlaybackEvent::Finished);
        tracing::info!(
            algorithm = ?self.algorithm,
            size = self.dataset.len(),
            steps = self.player.sequence_len(),
            comparisons = self.counters.comparisons(),
            swaps = self.counters.swaps(),
            "run finished"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/visualizer.rs"]
mod tests;
