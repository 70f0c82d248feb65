// Display state module
// The highlight store replay writes into, plus a call recorder

pub mod highlight;
pub mod models;

pub use highlight::HighlightState;
pub use models::{RecordingSink, SinkCall};
