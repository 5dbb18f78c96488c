//! Group definitions.

use rkyv::{Archive, Deserialize, Serialize};

/// A named logical section fields belong to (e.g. "Interview",
/// "Applicant", "Request"). Seeded once at build time, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct GroupDef {
    /// Group name (unique within the catalog).
    pub name: String,
}

impl GroupDef {
    /// Create a new group definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
