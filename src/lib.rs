//! sortstep is the step engine behind a sorting-algorithm visualizer.
//!
//! It turns a sorting algorithm's execution into a finite, pre-materialized [`Sequence`] of
//! atomic [`Step`]s over a shared array, and replays that sequence at a user-controlled pace.
//! Rendering, windowing and input live outside this crate; they read the state exposed here
//! and issue the commands on [`Visualizer`].
//!
//! # Pipeline overview
//!
//! 1. **Shuffle**: [`Dataset`] receives a fresh random permutation of `1..=n`.
//! 2. **Generate**: on first play, [`generate`] materializes the whole [`Sequence`] against the
//!    current permutation. Length-only schedules (bubble, selection, insertion, merge) emit
//!    index steps; quicksort and heapsort sort a shadow copy first to discover theirs.
//! 3. **Replay**: each frame, [`Player::tick`] executes a speed-dependent number of steps in
//!    order, mutating the live [`Dataset`] and [`Counters`].
//! 4. **Finish**: when the cursor reaches the end, every index is tagged
//!    [`Annotation::Sorted`].
//!
//! Key constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single writer**: steps only ever run from the player's own tick, strictly in order.
//! - **Correct by replay**: any generated sequence, replayed to completion against the
//!   permutation it was generated for, leaves the values sorted ascending.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod generate;
mod model;
mod playback;
mod session;
mod step;

pub use foundation::core::{Annotation, SizeOption, SpeedCurve, SpeedLevel};
pub use foundation::error::{SortstepError, SortstepResult};
pub use generate::generate;
pub use model::{Algorithm, Counters, Dataset};
pub use playback::{ClockMode, PlaybackState, Player, TickOutcome};
pub use session::{
    AdvanceReport, PlaybackEvent, Snapshot, Status, Visualizer, VisualizerConfig,
};
pub use step::{Checkpoint, Sequence, Step};
