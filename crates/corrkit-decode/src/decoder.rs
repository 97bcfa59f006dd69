use std::io::Read;

use serde::Serialize;
use tracing::{debug, warn};

use corrkit_frame::{BitReader, FrameCandidate, FrameReader, FrameScanner};
use corrkit_schema::{FieldDescriptor, SchemaRegistry};

use crate::error::{DecodeError, Result};
use crate::record::{FieldValue, Record, RecordField};

/// Per-buffer decode tally.
///
/// `frames` counts every scanned candidate; `skipped` counts frames
/// whose message number has no registered schema, `failed` counts
/// frames dropped for truncated reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    pub frames: usize,
    pub decoded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Schema-driven frame decoder.
///
/// Borrows a read-only [`SchemaRegistry`]; decoders are cheap to copy
/// and carry no state between frames, so any number may run over
/// independent buffers concurrently.
#[derive(Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r SchemaRegistry,
}

impl<'r> Decoder<'r> {
    /// Create a decoder over the given registry.
    pub fn new(registry: &'r SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Decode one frame's bytes into a record.
    ///
    /// The first four reads are fixed: preamble echo (8 bits), reserved
    /// (6), payload length (10), message number (12). An unregistered
    /// message number yields `Ok(None)`: an expected skip, not an
    /// error. A read past the end of the frame is fatal for this frame
    /// only.
    pub fn decode_frame(&self, frame: &[u8]) -> Result<Option<Record>> {
        let mut reader = BitReader::new(frame);

        let header = read_fixed(&mut reader, "header", 8)? as u8;
        let zero = read_fixed(&mut reader, "zero", 6)? as u8;
        let length = read_fixed(&mut reader, "length", 10)? as u16;
        let msg_number = read_fixed(&mut reader, "msg_number", 12)? as u16;

        let Some(schema) = self.registry.get(msg_number) else {
            debug!(msg_number, "skipping frame with unregistered message number");
            return Ok(None);
        };

        let mut fields =
            Vec::with_capacity(schema.header.len() + schema.content.len());
        // Slot 0 of each list is the discriminator-style placeholder;
        // the message number was already consumed above.
        for desc in schema.header.iter().skip(1) {
            fields.push(read_field(&mut reader, desc)?);
        }
        // One content block; remaining frame bits are left unread.
        for desc in schema.content.iter().skip(1) {
            fields.push(read_field(&mut reader, desc)?);
        }

        Ok(Some(Record {
            header,
            zero,
            length,
            msg_number,
            fields,
        }))
    }

    /// Scan and decode a whole buffer, isolating per-frame failures.
    pub fn decode_buffer(&self, buf: &[u8]) -> (Vec<Record>, DecodeStats) {
        let mut records = Vec::new();
        let mut stats = DecodeStats::default();
        for candidate in FrameScanner::new(buf) {
            self.decode_candidate(&candidate, &mut records, &mut stats);
        }
        (records, stats)
    }

    /// Lazy variant of [`decode_buffer`](Self::decode_buffer), yielding
    /// successfully decoded records only.
    pub fn iter_records<'a>(&self, buf: &'a [u8]) -> RecordIter<'r, 'a> {
        RecordIter {
            decoder: *self,
            frames: FrameScanner::new(buf),
        }
    }

    /// Decode frames pulled from a `Read` source in chunks.
    ///
    /// Only complete frames are decoded; a frame cut off at end of
    /// stream is dropped by the frame reader before it gets here.
    pub fn decode_read<R: Read>(&self, source: R) -> Result<(Vec<Record>, DecodeStats)> {
        let mut records = Vec::new();
        let mut stats = DecodeStats::default();
        let mut reader = FrameReader::new(source);
        while let Some(frame) = reader.read_frame()? {
            stats.frames += 1;
            match self.decode_frame(&frame.data) {
                Ok(Some(record)) => {
                    stats.decoded += 1;
                    records.push(record);
                }
                Ok(None) => stats.skipped += 1,
                Err(err) => {
                    warn!(error = %err, "dropping undecodable frame");
                    stats.failed += 1;
                }
            }
        }
        Ok((records, stats))
    }

    fn decode_candidate(
        &self,
        candidate: &FrameCandidate<'_>,
        records: &mut Vec<Record>,
        stats: &mut DecodeStats,
    ) {
        stats.frames += 1;
        match self.decode_frame(candidate.data) {
            Ok(Some(record)) => {
                stats.decoded += 1;
                records.push(record);
            }
            Ok(None) => stats.skipped += 1,
            Err(err) => {
                warn!(
                    offset = candidate.offset,
                    error = %err,
                    "dropping undecodable frame"
                );
                stats.failed += 1;
            }
        }
    }
}

/// Iterator over the records a buffer decodes to.
///
/// Skipped and failed frames are logged and omitted.
pub struct RecordIter<'r, 'a> {
    decoder: Decoder<'r>,
    frames: FrameScanner<'a>,
}

impl Iterator for RecordIter<'_, '_> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        for candidate in self.frames.by_ref() {
            match self.decoder.decode_frame(candidate.data) {
                Ok(Some(record)) => return Some(record),
                Ok(None) => continue,
                Err(err) => {
                    warn!(
                        offset = candidate.offset,
                        error = %err,
                        "dropping undecodable frame"
                    );
                    continue;
                }
            }
        }
        None
    }
}

fn read_fixed(reader: &mut BitReader<'_>, name: &str, width: u8) -> Result<u32> {
    reader.read_bits(width).map_err(|source| DecodeError::Truncated {
        field: name.to_string(),
        source,
    })
}

fn read_field(
    reader: &mut BitReader<'_>,
    desc: &FieldDescriptor,
) -> Result<RecordField> {
    let value = if desc.ty.signed {
        reader.read_signed(desc.ty.width).map(FieldValue::Signed)
    } else {
        reader.read_bits(desc.ty.width).map(FieldValue::Unsigned)
    };
    let value = value.map_err(|source| DecodeError::Truncated {
        field: desc.name.clone(),
        source,
    })?;
    Ok(RecordField {
        name: desc.name.clone(),
        value,
    })
}
