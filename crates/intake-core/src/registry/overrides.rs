//! Override tables applied after the mechanical registration pass.
//!
//! Manually special-cased fields are data, not logic: reclassifications,
//! forced groups, and explicit numeric bounds ship in the seed and are
//! applied by the builder, so adding or removing an exception is a seed
//! change only.

use crate::catalog::{FieldDef, FieldKind};
use serde::{Deserialize, Serialize};

/// Reclassify a field's semantic kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindOverride {
    /// Owning entity name.
    pub entity: String,
    /// Column name (the field label).
    pub column: String,
    /// Kind the field is reclassified to.
    pub kind: FieldKind,
}

/// Force a field into a group, overriding the parsed annotation tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOverride {
    /// Owning entity name.
    pub entity: String,
    /// Column name (the field label).
    pub column: String,
    /// Group the field is assigned to.
    pub group: String,
}

/// Declare explicit numeric bounds for a field.
///
/// Absent bounds fall back to the default [0, 128].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeOverride {
    /// Owning entity name.
    pub entity: String,
    /// Column name (the field label).
    pub column: String,
    /// Minimum legal value (inclusive).
    #[serde(default)]
    pub min: Option<i64>,
    /// Maximum legal value (inclusive).
    #[serde(default)]
    pub max: Option<i64>,
}

impl KindOverride {
    /// Create a new kind override.
    pub fn new(entity: impl Into<String>, column: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            entity: entity.into(),
            column: column.into(),
            kind,
        }
    }

    /// Check whether this override targets the given field.
    pub fn matches(&self, field: &FieldDef) -> bool {
        field.entity == self.entity && field.label == self.column
    }
}

impl GroupOverride {
    /// Create a new group override.
    pub fn new(entity: impl Into<String>, column: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            column: column.into(),
            group: group.into(),
        }
    }

    /// Check whether this override targets the given field.
    pub fn matches(&self, field: &FieldDef) -> bool {
        field.entity == self.entity && field.label == self.column
    }
}

impl RangeOverride {
    /// Create a range override with explicit bounds.
    pub fn new(entity: impl Into<String>, column: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            entity: entity.into(),
            column: column.into(),
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create a range override using the default bounds.
    pub fn default_bounds(entity: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            column: column.into(),
            min: None,
            max: None,
        }
    }

    /// Check whether this override targets the given field.
    pub fn matches(&self, field: &FieldDef) -> bool {
        field.entity == self.entity && field.label == self.column
    }
}
