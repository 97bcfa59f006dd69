/// Errors raised while loading or validating schema configuration.
///
/// All of these indicate bad configuration data, not malformed wire
/// input; the decoder's unknown-message skip is deliberately not an
/// error at all.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A schema file could not be read from disk.
    #[error("failed to load schema: {0}")]
    LoadFailed(String),

    /// A schema document is not valid JSON of the expected shape.
    #[error("failed to parse schema: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// A field declares a type tag with no width/signedness resolution.
    #[error("field `{field}` has unresolvable type tag `{tag}`")]
    UnknownFieldType { field: String, tag: String },

    /// The message number does not fit the wire's 12-bit field.
    #[error("message number {0} exceeds the 12-bit maximum (4095)")]
    MsgNumberOutOfRange(u32),

    /// A schema declares no header fields at all.
    #[error("schema for message {0} declares an empty header field list")]
    EmptyHeader(u16),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
