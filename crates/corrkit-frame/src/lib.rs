//! Frame boundary scanning and bit-level field extraction for RTCM3-style
//! correction streams.
//!
//! A correction stream is a run of bytes carrying variable-length frames:
//! - A 1-byte preamble (0xD3) for stream synchronization
//! - A 6-bit reserved field (must be zero) and a 10-bit payload length
//! - `length` payload bytes followed by a 3-byte trailer
//!
//! This crate finds frame boundaries ([`FrameScanner`], [`StreamScanner`])
//! and reads arbitrary-width bit fields out of them ([`BitReader`]). It
//! knows nothing about message schemas.

pub mod bits;
pub mod error;
pub mod scanner;
pub mod stream;

pub use bits::BitReader;
pub use error::{BitError, FrameError, Result};
pub use scanner::{FrameCandidate, FrameScanner, HEADER_SIZE, PREAMBLE, TRAILER_SIZE};
pub use stream::{FrameReader, OwnedFrame, StreamScanner};
