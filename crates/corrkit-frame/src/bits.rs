//! Bit cursor over an immutable byte buffer.
//!
//! Correction payloads pack fields of 1..=32 bits back to back with no
//! byte alignment; the reader treats the buffer as one continuous
//! big-endian bitstream (within a byte, bit 7 is consumed first).

use crate::error::BitError;

/// Sequential MSB-first bit reader over a `&[u8]`.
///
/// The cursor is an absolute bit offset from the buffer start and only
/// moves forward, by the width of each read. One reader is created per
/// frame and discarded after decoding it.
pub struct BitReader<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the start of the buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, cursor: 0 }
    }

    /// Current position as an absolute bit offset.
    pub fn bit_pos(&self) -> usize {
        self.cursor
    }

    /// Bits left between the cursor and the end of the buffer.
    pub fn remaining_bits(&self) -> usize {
        self.buf.len() * 8 - self.cursor
    }

    /// Read `width` bits (1..=32) and return them as an unsigned value.
    ///
    /// The result is the integer value of exactly `width` bits read
    /// MSB-first from the current offset, independent of surrounding
    /// bits, for every starting offset and every width, including reads
    /// straddling up to five bytes.
    pub fn read_bits(&mut self, width: u8) -> Result<u32, BitError> {
        if !(1..=32).contains(&width) {
            return Err(BitError::WidthOutOfRange { width });
        }
        if self.cursor + width as usize > self.buf.len() * 8 {
            return Err(BitError::OutOfBounds {
                requested: width as usize,
                available: self.remaining_bits(),
            });
        }

        let mut value: u32 = 0;
        let mut remaining = width as usize;
        while remaining > 0 {
            let byte = self.buf[self.cursor / 8];
            let bit_in_byte = self.cursor % 8;

            // Take what is left of this byte, capped by the field width.
            let take = (8 - bit_in_byte).min(remaining);
            let shift = 8 - bit_in_byte - take;
            let mask = ((1u16 << take) - 1) as u8;
            let chunk = (byte >> shift) & mask;

            value = (value << take) | u32::from(chunk);
            self.cursor += take;
            remaining -= take;
        }
        Ok(value)
    }

    /// Read `width` bits and reinterpret them as two's complement.
    ///
    /// For `width < 32`, a set top bit yields `unsigned - 2^width`; at
    /// `width = 32` the native `i32` reinterpretation applies directly.
    pub fn read_signed(&mut self, width: u8) -> Result<i32, BitError> {
        let raw = self.read_bits(width)?;
        Ok(sign_extend(raw, width))
    }
}

fn sign_extend(value: u32, width: u8) -> i32 {
    if width < 32 && value & (1 << (width - 1)) != 0 {
        (value | (u32::MAX << width)) as i32
    } else {
        value as i32
    }
}
