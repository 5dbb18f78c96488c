//! Field definitions for the tracked entities.

use super::types::FieldKind;
use rkyv::{Archive, Deserialize, Serialize};

/// Presentation and validation metadata for one column of a tracked
/// entity.
///
/// A field is identified by (entity, position); (entity, label) is unique
/// as well. Fields are created once by the registry pass; later build
/// steps only update the kind, group, and group position.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct FieldDef {
    /// Owning entity name.
    pub entity: String,
    /// 1-based ordinal position within the entity.
    pub position: u32,
    /// Display label (the column name).
    pub label: String,
    /// Raw annotation text, or a "not available" sentinel.
    pub description: String,
    /// Declared semantic type.
    pub kind: FieldKind,
    /// First month (1-12) the field definition applies to.
    pub valid_from_month: u8,
    /// Last month (1-12) the field definition applies to.
    pub valid_to_month: u8,
    /// Default value, if any.
    pub default_value: Option<String>,
    /// Whether the field is a hard constraint for data entry.
    pub required: bool,
    /// Resolved group name; `None` while unresolved.
    pub group: Option<String>,
    /// Display position within the group, assigned by the builder.
    /// 0 until the field's group is resolved.
    pub group_position: u32,
}

impl FieldDef {
    /// Create a field with the registry defaults: coded-numeric kind,
    /// valid the whole year, no default, not required, group unresolved.
    pub fn new(entity: impl Into<String>, position: u32, label: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            position,
            label: label.into(),
            description: String::new(),
            kind: FieldKind::CodedNumeric,
            valid_from_month: 1,
            valid_to_month: 12,
            default_value: None,
            required: false,
            group: None,
            group_position: 0,
        }
    }

    /// Set the raw description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the semantic kind.
    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Restrict the validity window to a month range (inclusive).
    pub fn with_validity(mut self, from_month: u8, to_month: u8) -> Self {
        self.valid_from_month = from_month;
        self.valid_to_month = to_month;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Mark the field as a hard constraint.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Check whether the field definition applies in the given month.
    pub fn valid_in_month(&self, month: u8) -> bool {
        month >= self.valid_from_month && month <= self.valid_to_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults() {
        let field = FieldDef::new("INTERVIEW", 3, "Situation");

        assert_eq!(field.entity, "INTERVIEW");
        assert_eq!(field.position, 3);
        assert_eq!(field.kind, FieldKind::CodedNumeric);
        assert_eq!(field.valid_from_month, 1);
        assert_eq!(field.valid_to_month, 12);
        assert!(field.default_value.is_none());
        assert!(!field.required);
        assert!(field.group.is_none());
    }

    #[test]
    fn test_validity_window() {
        let field = FieldDef::new("INTERVIEW", 1, "Quarter").with_validity(4, 6);

        assert!(!field.valid_in_month(3));
        assert!(field.valid_in_month(4));
        assert!(field.valid_in_month(6));
        assert!(!field.valid_in_month(7));
    }

    #[test]
    fn test_builder() {
        let field = FieldDef::new("REQUEST", 2, "Nature")
            .with_kind(FieldKind::Text)
            .with_default("0")
            .required();

        assert_eq!(field.kind, FieldKind::Text);
        assert_eq!(field.default_value.as_deref(), Some("0"));
        assert!(field.required);
    }
}
