//! Core type definitions for the catalog.

use rkyv::{Archive, Deserialize, Serialize};
use std::fmt;

/// Declared semantic type of a field.
///
/// Also serde-readable so kind overrides can ship in the seed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Numeric code drawn from an enumerated choice list.
    CodedNumeric,
    /// Free-form numeric value, optionally bounded by a range.
    FreeNumeric,
    /// Free-form or list-valued text.
    #[serde(rename = "string")]
    Text,
}

impl FieldKind {
    /// Check if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldKind::CodedNumeric | FieldKind::FreeNumeric)
    }

    /// Check if this kind draws its values from a coded choice list.
    pub fn is_coded(&self) -> bool {
        matches!(self, FieldKind::CodedNumeric)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::CodedNumeric => write!(f, "coded-numeric"),
            FieldKind::FreeNumeric => write!(f, "free-numeric"),
            FieldKind::Text => write!(f, "string"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_checks() {
        assert!(FieldKind::CodedNumeric.is_numeric());
        assert!(FieldKind::FreeNumeric.is_numeric());
        assert!(!FieldKind::Text.is_numeric());

        assert!(FieldKind::CodedNumeric.is_coded());
        assert!(!FieldKind::FreeNumeric.is_coded());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Text.to_string(), "string");
        assert_eq!(FieldKind::CodedNumeric.to_string(), "coded-numeric");
    }

    #[test]
    fn test_kind_seed_names() {
        let kind: FieldKind = serde_json::from_str("\"free-numeric\"").unwrap();
        assert_eq!(kind, FieldKind::FreeNumeric);
        let kind: FieldKind = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(kind, FieldKind::Text);
    }
}
