//! Incremental frame extraction from chunked input.
//!
//! Correction data usually arrives in arbitrary-sized chunks (HTTP
//! bodies, serial reads). [`StreamScanner`] accumulates chunks and hands
//! out complete frames; [`FrameReader`] drives it from any [`Read`]
//! source. Callers never deal with partial frames.

use std::io::{ErrorKind, Read};

use bytes::{Buf, Bytes, BytesMut};
use tracing::trace;

use crate::error::{FrameError, Result};
use crate::scanner::{HEADER_SIZE, PREAMBLE, TRAILER_SIZE};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// A complete frame lifted out of the stream buffer.
#[derive(Debug, Clone)]
pub struct OwnedFrame {
    /// Payload length declared by the 10-bit length field.
    pub payload_len: usize,
    /// Full frame bytes: header + payload + trailer.
    pub data: Bytes,
}

/// Accumulates stream chunks and yields complete frames.
///
/// Unlike [`crate::FrameScanner`], which emits clamped candidates at the
/// end of a bounded buffer, this scanner holds an incomplete candidate
/// back until the rest of its span arrives, and consumes the full
/// `payload_len + 6` span of every frame it returns. The bounded scanner
/// resumes only `payload_len + 1` bytes past a match, so a qualified
/// preamble among a frame's trailer bytes yields an extra candidate
/// there but never here. Bytes preceding the first plausible preamble
/// are discarded.
pub struct StreamScanner {
    buf: BytesMut,
}

impl StreamScanner {
    /// Create an empty scanner.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Append a chunk of stream data.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Bytes currently buffered (garbage prefix plus any partial frame).
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Extract the next complete frame, if one is buffered.
    ///
    /// Returns `None` when more data is needed; push another chunk and
    /// call again.
    pub fn next_frame(&mut self) -> Option<OwnedFrame> {
        let mut pos = 0;
        while pos < self.buf.len() {
            if self.buf[pos] != PREAMBLE {
                pos += 1;
                continue;
            }
            if pos + 2 >= self.buf.len() {
                // Plausible preamble at the tail; wait for the length bytes.
                self.discard(pos);
                return None;
            }
            if self.buf[pos + 1] & 0xFC != 0 {
                pos += 1;
                continue;
            }
            let payload_len =
                usize::from(self.buf[pos + 2]) | usize::from(self.buf[pos + 1]) << 8;
            if payload_len == 0 {
                pos += 1;
                continue;
            }

            let total = HEADER_SIZE + payload_len + TRAILER_SIZE;
            if self.buf.len() - pos < total {
                // Candidate qualified but its span is not all here yet.
                self.discard(pos);
                return None;
            }

            self.discard(pos);
            let data = self.buf.split_to(total).freeze();
            return Some(OwnedFrame { payload_len, data });
        }
        // No plausible preamble anywhere in the buffer.
        self.discard(self.buf.len());
        None
    }

    fn discard(&mut self, n: usize) {
        if n > 0 {
            trace!(bytes = n, "discarding unframed stream bytes");
            self.buf.advance(n);
        }
    }
}

impl Default for StreamScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads complete frames from any `Read` stream.
pub struct FrameReader<R> {
    inner: R,
    scanner: StreamScanner,
    eof: bool,
}

impl<R: Read> FrameReader<R> {
    /// Create a frame reader over the given stream.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            scanner: StreamScanner::new(),
            eof: false,
        }
    }

    /// Read the next complete frame (blocking).
    ///
    /// Returns `Ok(None)` at end of stream. A frame cut off by EOF is
    /// dropped; truncation yields fewer frames, not an error.
    pub fn read_frame(&mut self) -> Result<Option<OwnedFrame>> {
        loop {
            if let Some(frame) = self.scanner.next_frame() {
                return Ok(Some(frame));
            }
            if self.eof {
                return Ok(None);
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                self.eof = true;
                continue;
            }
            self.scanner.push(&chunk[..read]);
        }
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> R {
        self.inner
    }
}
