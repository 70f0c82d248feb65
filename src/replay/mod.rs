// Replay module
// Drains a finished trace into the highlight sink at a fixed cadence

pub mod scheduler;
pub mod sink;

pub use scheduler::{replay, ReplayConfig, Replayer};
pub use sink::{Channel, HighlightSink};
