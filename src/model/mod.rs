pub(crate) mod algorithm;
pub(crate) mod dataset;

pub use algorithm::Algorithm;
pub use dataset::{Counters, Dataset};
