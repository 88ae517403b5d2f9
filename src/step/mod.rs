pub(crate) mod op;
pub(crate) mod partition;
pub(crate) mod sequence;

pub use op::{Checkpoint, Step};
pub use sequence::Sequence;
