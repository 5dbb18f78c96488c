//! Source schema contract and the mechanical registration pass.
//!
//! The tracked schema is supplied as an explicit list of (entity, column,
//! annotation) triples rather than introspected from a live storage
//! engine, so the registry stays decoupled from any particular backend's
//! metadata API.

use crate::catalog::FieldDef;
use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Sentinel description for a column without an annotation.
pub const NOT_AVAILABLE: &str = "not available";

/// One column of a tracked entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name; becomes the field label.
    pub name: String,
    /// Raw annotation text, if the column has one.
    #[serde(default)]
    pub annotation: Option<String>,
    /// Whether the column is a hard constraint for data entry.
    #[serde(default)]
    pub required: bool,
    /// Default value preloaded into entry forms.
    #[serde(default)]
    pub default: Option<String>,
    /// Validity window as `[from_month, to_month]` (1-12, inclusive);
    /// absent means the whole year.
    #[serde(default)]
    pub valid_months: Option<(u8, u8)>,
}

/// One tracked entity with its ordinal column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpec {
    /// Entity name.
    pub name: String,
    /// Columns in declared ordinal order.
    pub columns: Vec<ColumnSpec>,
}

impl ColumnSpec {
    /// Create a column without an annotation.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            required: false,
            default: None,
            valid_months: None,
        }
    }

    /// Create an annotated column.
    pub fn annotated(name: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            annotation: Some(annotation.into()),
            ..Self::bare(name)
        }
    }

    /// Mark the column as a hard constraint.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Restrict the validity window to a month range (inclusive).
    pub fn with_validity(mut self, from_month: u8, to_month: u8) -> Self {
        self.valid_months = Some((from_month, to_month));
        self
    }
}

impl EntitySpec {
    /// Create a new entity spec.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnSpec>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}

/// Run the mechanical registration pass.
///
/// Enumerates every column in (entity name, ordinal position) order and
/// produces one field per column with the registry defaults, then the
/// column's own constraint attributes (required, default value, validity
/// window) where declared. Positions
/// are 1-based. Colliding (entity, position) or (entity, label) keys are
/// a schema-definition bug and abort with [`Error::DuplicateKey`].
pub fn register(entities: &[EntitySpec]) -> Result<Vec<FieldDef>, Error> {
    let mut sorted: Vec<&EntitySpec> = entities.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    // A repeated entity name would re-issue the same positions.
    for pair in sorted.windows(2) {
        if pair[0].name == pair[1].name {
            return Err(Error::DuplicateKey {
                entity: pair[0].name.clone(),
                key: "entity declared twice".to_owned(),
            });
        }
    }

    let mut fields = Vec::new();
    for entity in sorted {
        for (ordinal, column) in entity.columns.iter().enumerate() {
            let position = (ordinal + 1) as u32;
            if entity.columns[..ordinal].iter().any(|c| c.name == column.name) {
                return Err(Error::DuplicateKey {
                    entity: entity.name.clone(),
                    key: format!("label '{}'", column.name),
                });
            }
            let description = column.annotation.as_deref().unwrap_or(NOT_AVAILABLE);
            let mut field = FieldDef::new(&entity.name, position, &column.name)
                .with_description(description);
            if column.required {
                field = field.required();
            }
            if let Some(value) = &column.default {
                field = field.with_default(value.clone());
            }
            if let Some((from, to)) = column.valid_months {
                field = field.with_validity(from, to);
            }
            fields.push(field);
        }
    }
    Ok(fields)
}
