pub(crate) mod config;
pub(crate) mod visualizer;

pub use config::VisualizerConfig;
pub use visualizer::{AdvanceReport, PlaybackEvent, Snapshot, Status, Visualizer};
