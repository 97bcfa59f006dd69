//! Schema-driven record decoding for framed correction streams.
//!
//! Composes the frame scanner and bit cursor from `corrkit-frame` with
//! the message schemas from `corrkit-schema`: each candidate frame is
//! opened with a fresh bit cursor, its fixed framing fields are read,
//! and the message number selects the field layout for the rest.
//!
//! Decoding a buffer is synchronous, allocation-light and stateless
//! between frames; independent buffers may be decoded from independent
//! threads sharing one read-only registry.

pub mod decoder;
pub mod error;
pub mod record;

pub use decoder::{DecodeStats, Decoder, RecordIter};
pub use error::{DecodeError, Result};
pub use record::{FieldValue, Record, RecordField};
