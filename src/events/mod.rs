// Visualization events module
// Event kinds, the trace queue, and the compact tuple codec

pub mod codec;
pub mod types;

pub use codec::{decode, decode_trace, encode, encode_trace, CodecError, RawEvent, RawValue};
pub use types::{Event, Trace};
