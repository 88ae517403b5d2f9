pub(crate) mod clock;
pub(crate) mod player;

pub use clock::ClockMode;
pub use player::{PlaybackState, Player, TickOutcome};
