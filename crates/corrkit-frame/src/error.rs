/// Errors from bit-level reads.
#[derive(Debug, thiserror::Error)]
pub enum BitError {
    /// The requested width is outside the supported 1..=32 range.
    #[error("bit width {width} outside supported range 1..=32")]
    WidthOutOfRange { width: u8 },

    /// The read would pass the end of the buffer.
    #[error("read of {requested} bits exceeds buffer ({available} bits left)")]
    OutOfBounds { requested: usize, available: usize },
}

/// Errors from stream-fed frame reading.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// An I/O error occurred while pulling bytes from the source.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
