//! Schema-driven decoder for framed, bit-packed correction-data streams.
//!
//! corrkit scans byte streams for preamble-delimited frames, reads their
//! bit-packed payloads with an MSB-first cursor, and decodes them into
//! named records driven by per-message-number schemas.
//!
//! # Crate Structure
//!
//! - [`frame`] — Frame scanning, stream accumulation, and the bit cursor
//! - [`schema`] — Message schemas: field layouts keyed by message number
//! - [`decode`] — Schema-driven decoding of frames into records

/// Re-export frame types.
pub mod frame {
    pub use corrkit_frame::*;
}

/// Re-export schema types.
pub mod schema {
    pub use corrkit_schema::*;
}

/// Re-export decode types.
pub mod decode {
    pub use corrkit_decode::*;
}
