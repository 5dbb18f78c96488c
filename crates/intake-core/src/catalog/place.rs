//! Geographic reference hierarchy: grouping, place, sub-place.

use rkyv::{Archive, Deserialize, Serialize};

/// A grouping of places (e.g. an inter-communal area).
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct PlaceGroup {
    /// Group name (unique).
    pub name: String,
}

/// A place (town). Seeded statically or derived from the residence
/// field's value list.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct Place {
    /// Place name (unique).
    pub name: String,
    /// Owning place group, assigned by the membership pass.
    pub group: Option<String>,
}

/// A district of the capital place, derived from residence labels of the
/// form `"<capital> <district>"`.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct SubPlace {
    /// District name (the suffix after the capital prefix).
    pub name: String,
    /// Name of the owning place.
    pub place: String,
}

impl PlaceGroup {
    /// Create a new place group.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Place {
    /// Create a place without a group assignment.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
        }
    }
}

impl SubPlace {
    /// Create a sub-place linked to its owning place.
    pub fn new(name: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            place: place.into(),
        }
    }
}
