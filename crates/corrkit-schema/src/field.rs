use serde::Deserialize;

use crate::error::SchemaError;

/// Resolved wire type of one field: bit width plus signedness.
///
/// Resolution happens once at registration; decoding dispatches on this
/// pair and never touches the textual tag again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldType {
    /// Field width in bits, 1..=32.
    pub width: u8,
    /// Whether the field is sign-extended two's complement.
    pub signed: bool,
}

impl FieldType {
    /// Resolve a textual type tag.
    ///
    /// `uintN` and `bitN` are both unsigned; `intN` is signed. `N` is
    /// the width suffix and must be in 1..=32. Anything else has no
    /// resolution.
    pub fn resolve(tag: &str) -> Option<Self> {
        let (suffix, signed) = if let Some(rest) = tag.strip_prefix("uint") {
            (rest, false)
        } else if let Some(rest) = tag.strip_prefix("bit") {
            (rest, false)
        } else if let Some(rest) = tag.strip_prefix("int") {
            (rest, true)
        } else {
            return None;
        };
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Zero-padded widths ("uint012") are not canonical tags.
        if suffix.len() > 1 && suffix.starts_with('0') {
            return None;
        }
        let width: u8 = suffix.parse().ok()?;
        (1..=32).contains(&width).then_some(Self { width, signed })
    }
}

/// One field as authored in a schema document.
///
/// This is the raw `{ "name", "desc", "type" }` shape; the type tag is
/// still a string and may not resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A registered field: name, human documentation, resolved type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: String,
    pub description: String,
    pub ty: FieldType,
}

impl TryFrom<RawField> for FieldDescriptor {
    type Error = SchemaError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let ty = FieldType::resolve(&raw.ty).ok_or(SchemaError::UnknownFieldType {
            field: raw.name.clone(),
            tag: raw.ty,
        })?;
        Ok(Self {
            name: raw.name,
            description: raw.desc,
            ty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_unsigned_tags() {
        assert_eq!(
            FieldType::resolve("uint12"),
            Some(FieldType {
                width: 12,
                signed: false
            })
        );
        assert_eq!(
            FieldType::resolve("bit1"),
            Some(FieldType {
                width: 1,
                signed: false
            })
        );
        assert_eq!(
            FieldType::resolve("bit3"),
            Some(FieldType {
                width: 3,
                signed: false
            })
        );
        assert_eq!(
            FieldType::resolve("uint32"),
            Some(FieldType {
                width: 32,
                signed: false
            })
        );
    }

    #[test]
    fn resolves_signed_tags() {
        assert_eq!(
            FieldType::resolve("int20"),
            Some(FieldType {
                width: 20,
                signed: true
            })
        );
        assert_eq!(
            FieldType::resolve("int32"),
            Some(FieldType {
                width: 32,
                signed: true
            })
        );
    }

    #[test]
    fn rejects_unknown_tags() {
        for tag in [
            "float32", "uint0", "uint33", "int0", "int", "uint", "bit", "u12", "uint-4",
            "uint+4", "int12x", "uint012", "int05", "bit01", "",
        ] {
            assert_eq!(FieldType::resolve(tag), None, "tag {tag:?}");
        }
    }

    #[test]
    fn descriptor_conversion_reports_field_and_tag() {
        let raw = RawField {
            name: "tow".into(),
            desc: "Epoch Time".into(),
            ty: "float30".into(),
        };
        let err = FieldDescriptor::try_from(raw).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::UnknownFieldType { ref field, ref tag }
                if field == "tow" && tag == "float30"
        ));
    }
}
