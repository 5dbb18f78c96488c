//! Coded choices and plain value lists.

use rkyv::{Archive, Deserialize, Serialize};

/// One allowed value of a coded field: a machine code paired with its
/// human-readable label.
///
/// Keyed by (entity, position, code). Display order is independent of
/// lexical code order and preserves the source annotation order.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct CodedChoice {
    /// Owning entity name.
    pub entity: String,
    /// Owning field position.
    pub position: u32,
    /// Machine code stored in the record.
    pub code: String,
    /// 1-based display order within the field.
    pub display_order: u32,
    /// Human-readable label.
    pub label: String,
}

/// One item of a plain (uncoded) value list.
///
/// Unlike a [`CodedChoice`] there is no machine code; the sequence number
/// is the implicit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct ValueListEntry {
    /// Owning entity name.
    pub entity: String,
    /// Owning field position.
    pub position: u32,
    /// 1-based sequence number within the field.
    pub seq: u32,
    /// The allowed label.
    pub label: String,
}

impl CodedChoice {
    /// Create a new coded choice.
    pub fn new(
        entity: impl Into<String>,
        position: u32,
        code: impl Into<String>,
        display_order: u32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            position,
            code: code.into(),
            display_order,
            label: label.into(),
        }
    }
}

impl ValueListEntry {
    /// Create a new value list entry.
    pub fn new(
        entity: impl Into<String>,
        position: u32,
        seq: u32,
        label: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            position,
            seq,
            label: label.into(),
        }
    }
}
