use corrkit_frame::BitError;

/// Errors from decoding a single frame or a stream of frames.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// A field read ran past the end of the frame buffer. Fatal for the
    /// frame, never for the buffer containing it.
    #[error("truncated frame while reading `{field}`: {source}")]
    Truncated {
        field: String,
        #[source]
        source: BitError,
    },

    /// I/O failure while pulling frames from a stream source.
    #[error("stream decode failed: {0}")]
    Io(#[from] corrkit_frame::FrameError),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
