use serde::Serialize;

/// Value of one decoded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Unsigned(u32),
    Signed(i32),
}

impl FieldValue {
    /// Widen to `i64`, which holds every representable field value.
    pub fn as_i64(&self) -> i64 {
        match self {
            FieldValue::Unsigned(v) => i64::from(*v),
            FieldValue::Signed(v) => i64::from(*v),
        }
    }
}

/// One named field in wire order.
#[derive(Debug, Clone, Serialize)]
pub struct RecordField {
    pub name: String,
    pub value: FieldValue,
}

/// A decoded frame: the four fixed framing fields plus the
/// schema-driven fields in wire order.
///
/// Created fresh per frame; ownership transfers to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// 8-bit preamble echo.
    pub header: u8,
    /// 6-bit reserved field, zero on well-formed frames.
    pub zero: u8,
    /// 10-bit declared payload length.
    pub length: u16,
    /// 12-bit message type identifier.
    pub msg_number: u16,
    /// Schema fields, in the order they were read.
    pub fields: Vec<RecordField>,
}

impl Record {
    /// Look a schema field up by name.
    pub fn get(&self, name: &str) -> Option<FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
    }
}
