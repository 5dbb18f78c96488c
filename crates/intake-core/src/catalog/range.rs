//! Numeric range declarations.

use rkyv::{Archive, Deserialize, Serialize};

/// Default inclusive bounds used when a range exists but no explicit
/// bound was declared.
pub const DEFAULT_BOUNDS: (i64, i64) = (0, 128);

/// Inclusive numeric bounds for one field's legal values.
///
/// At most one range per field; a field without a range is presumed
/// unbounded within its representation width.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct RangeDef {
    /// Owning entity name.
    pub entity: String,
    /// Owning field position.
    pub position: u32,
    /// Minimum legal value (inclusive).
    pub min: i64,
    /// Maximum legal value (inclusive).
    pub max: i64,
}

impl RangeDef {
    /// Create a range with explicit bounds.
    pub fn new(entity: impl Into<String>, position: u32, min: i64, max: i64) -> Self {
        Self {
            entity: entity.into(),
            position,
            min,
            max,
        }
    }

    /// Create a range with the default bounds.
    pub fn default_bounds(entity: impl Into<String>, position: u32) -> Self {
        Self::new(entity, position, DEFAULT_BOUNDS.0, DEFAULT_BOUNDS.1)
    }

    /// Check whether a value falls inside the bounds.
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}
