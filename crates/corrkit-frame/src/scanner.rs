//! Frame boundary detection over a bounded byte buffer.

/// Fixed byte marking a candidate frame start.
pub const PREAMBLE: u8 = 0xD3;

/// Framing header: preamble (1) + reserved/length (2) = 3 bytes.
pub const HEADER_SIZE: usize = 3;

/// Trailing integrity bytes. Carried with the frame but never validated
/// at this layer.
pub const TRAILER_SIZE: usize = 3;

/// A candidate frame byte-range within the scanned buffer.
///
/// `data` covers `[offset, offset + payload_len + 6)`, clamped to the
/// buffer end when the declared span overruns it. A clamped candidate is
/// still emitted; decoding it fails with an out-of-range read instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCandidate<'a> {
    /// Byte offset of the preamble within the scanned buffer.
    pub offset: usize,
    /// Payload length declared by the 10-bit length field.
    pub payload_len: usize,
    /// Frame bytes: header + payload + trailer, clamped to the buffer.
    pub data: &'a [u8],
}

impl FrameCandidate<'_> {
    /// Declared wire size of the frame (header + payload + trailer).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload_len + TRAILER_SIZE
    }

    /// Whether the full declared span was present in the buffer.
    pub fn is_complete(&self) -> bool {
        self.data.len() == self.wire_size()
    }
}

/// Scans a byte buffer for candidate frames.
///
/// A candidate starts at `i` only if `buf[i]` is the preamble, the top
/// 6 bits of `buf[i+1]` are zero (reserved field, rejecting preamble
/// bytes occurring inside payload data) and the 10-bit length
/// `buf[i+2] | buf[i+1] << 8` is non-zero. After an accepted candidate
/// the scan resumes `payload_len + 1` bytes past the preamble; rejected
/// positions advance by one.
///
/// The scan is pure and restartable: the same buffer always yields the
/// same candidate sequence, and an empty or preamble-free buffer yields
/// an empty sequence.
pub struct FrameScanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FrameScanner<'a> {
    /// Create a scanner over the whole buffer.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> Iterator for FrameScanner<'a> {
    type Item = FrameCandidate<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.buf.len() {
            let i = self.pos;
            if self.buf[i] != PREAMBLE {
                self.pos += 1;
                continue;
            }
            // A preamble in the last two bytes cannot be qualified.
            if i + 2 >= self.buf.len() {
                self.pos += 1;
                continue;
            }
            if self.buf[i + 1] & 0xFC != 0 {
                self.pos += 1;
                continue;
            }
            let payload_len = usize::from(self.buf[i + 2]) | usize::from(self.buf[i + 1]) << 8;
            if payload_len == 0 {
                self.pos += 1;
                continue;
            }

            let end = (i + HEADER_SIZE + payload_len + TRAILER_SIZE).min(self.buf.len());
            self.pos = i + payload_len + 1;
            return Some(FrameCandidate {
                offset: i,
                payload_len,
                data: &self.buf[i..end],
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(payload: &[u8]) -> Vec<u8> {
        let mut out = vec![PREAMBLE, (payload.len() >> 8) as u8, payload.len() as u8];
        out.extend_from_slice(payload);
        out.extend_from_slice(&[0xAA, 0xBB, 0xCC]); // unvalidated trailer
        out
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        assert_eq!(FrameScanner::new(&[]).count(), 0);
    }

    #[test]
    fn buffer_without_preamble_yields_nothing() {
        let buf = [0x00, 0x42, 0xFF, 0x13, 0x37];
        assert_eq!(FrameScanner::new(&buf).count(), 0);
    }

    #[test]
    fn single_frame_is_found() {
        let buf = frame(&[0x11, 0x22, 0x33, 0x44]);
        let candidates: Vec<_> = FrameScanner::new(&buf).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].offset, 0);
        assert_eq!(candidates[0].payload_len, 4);
        assert_eq!(candidates[0].data, buf.as_slice());
        assert!(candidates[0].is_complete());
    }

    #[test]
    fn leading_garbage_is_skipped() {
        let mut buf = vec![0x00, 0x7F, 0x01];
        buf.extend_from_slice(&frame(&[0xDE, 0xAD]));
        let candidates: Vec<_> = FrameScanner::new(&buf).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].offset, 3);
        assert_eq!(candidates[0].payload_len, 2);
    }

    #[test]
    fn preamble_with_reserved_bits_set_is_rejected() {
        // 0xD3 followed by a byte with the top 6 bits non-zero: payload
        // data that happens to look like a preamble.
        let buf = [0xD3, 0xFF, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert_eq!(FrameScanner::new(&buf).count(), 0);
    }

    #[test]
    fn zero_length_candidate_is_ignored() {
        let buf = [0xD3, 0x00, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
        assert_eq!(FrameScanner::new(&buf).count(), 0);
    }

    #[test]
    fn preamble_near_buffer_end_is_not_a_candidate() {
        assert_eq!(FrameScanner::new(&[0xD3]).count(), 0);
        assert_eq!(FrameScanner::new(&[0xD3, 0x00]).count(), 0);
    }

    #[test]
    fn truncated_span_is_emitted_clamped() {
        let full = frame(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let cut = &full[..full.len() - 5];
        let candidates: Vec<_> = FrameScanner::new(cut).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].payload_len, 8);
        assert_eq!(candidates[0].data.len(), cut.len());
        assert!(!candidates[0].is_complete());
    }

    #[test]
    fn multiple_frames_back_to_back() {
        let mut buf = frame(&[0x01; 10]);
        buf.extend_from_slice(&frame(&[0x02; 3]));
        buf.extend_from_slice(&frame(&[0x03; 7]));
        let candidates: Vec<_> = FrameScanner::new(&buf).collect();
        assert_eq!(
            candidates.iter().map(|c| c.payload_len).collect::<Vec<_>>(),
            vec![10, 3, 7]
        );
        assert_eq!(candidates[1].offset, 16);
        assert_eq!(candidates[2].offset, 25);
    }

    #[test]
    fn scan_is_idempotent() {
        let mut buf = vec![0xD3]; // stray unqualified preamble
        buf.extend_from_slice(&frame(&[9, 9, 9]));
        buf.extend_from_slice(&[0x55, 0x66]);
        buf.extend_from_slice(&frame(&[1]));

        let first: Vec<_> = FrameScanner::new(&buf).collect();
        let second: Vec<_> = FrameScanner::new(&buf).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn scan_resumes_past_consumed_payload() {
        // A preamble byte inside the first frame's payload must not
        // produce a second candidate.
        let inner = [0xD3, 0x00, 0x02, 0x00, 0x00];
        let buf = frame(&inner);
        let candidates: Vec<_> = FrameScanner::new(&buf).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].offset, 0);
    }
}
