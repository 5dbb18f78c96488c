//! Seed configuration: the complete static input of a catalog build.
//!
//! Everything the build consumes - group names, tracked entity
//! definitions, override tables, and the geographic reference lists -
//! ships as one versioned JSON document loaded here. Nothing is derived
//! at runtime.

use crate::error::Error;
use crate::registry::{EntitySpec, GroupOverride, KindOverride, RangeOverride};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The complete static input of one catalog build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    /// Known group names, in presentation order.
    pub groups: Vec<String>,
    /// The tracked entities with their annotated columns.
    pub entities: Vec<EntitySpec>,
    /// Field kind reclassifications.
    #[serde(default)]
    pub kind_overrides: Vec<KindOverride>,
    /// Forced group assignments.
    #[serde(default)]
    pub group_overrides: Vec<GroupOverride>,
    /// Explicit numeric bounds.
    #[serde(default)]
    pub range_overrides: Vec<RangeOverride>,
    /// Geographic reference seed.
    pub reference: ReferenceSeed,
}

/// Static geographic reference input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSeed {
    /// Place group names.
    #[serde(default)]
    pub place_groups: Vec<String>,
    /// Statically seeded place names.
    #[serde(default)]
    pub places: Vec<String>,
    /// Place-to-group membership list, applied as a second pass.
    #[serde(default)]
    pub memberships: Vec<Membership>,
    /// Name of the capital place whose districts appear in the residence
    /// list as `"<capital> <district>"`.
    pub capital: String,
    /// Locator of the residence field whose value list is scanned.
    pub residence: FieldLocator,
    /// Residence labels starting with this prefix denote an address
    /// outside the covered region and yield no place row.
    pub outside_prefix: String,
}

/// Assignment of one place to one place group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Place name.
    pub place: String,
    /// Place group name.
    pub group: String,
}

/// Locates a field by entity name and column label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLocator {
    /// Owning entity name.
    pub entity: String,
    /// Column name (the field label).
    pub column: String,
}

impl SeedSpec {
    /// Parse a seed from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::InvalidSeed(e.to_string()))
    }

    /// Load a seed from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::InvalidSeed(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FieldKind;

    #[test]
    fn test_seed_from_json() {
        let json = r#"{
            "groups": ["Interview", "Applicant"],
            "entities": [
                {
                    "name": "INTERVIEW",
                    "columns": [
                        { "name": "Date", "annotation": "Interview date, Group Interview", "required": true },
                        { "name": "Duration" }
                    ]
                }
            ],
            "kind_overrides": [
                { "entity": "INTERVIEW", "column": "Duration", "kind": "free-numeric" }
            ],
            "range_overrides": [
                { "entity": "INTERVIEW", "column": "Duration", "min": 0, "max": 240 }
            ],
            "reference": {
                "place_groups": ["Gulf Area"],
                "places": ["Vannes"],
                "memberships": [ { "place": "Vannes", "group": "Gulf Area" } ],
                "capital": "Vannes",
                "residence": { "entity": "INTERVIEW", "column": "Residence" },
                "outside_prefix": "Outside"
            }
        }"#;

        let seed = SeedSpec::from_json(json).unwrap();
        assert_eq!(seed.groups.len(), 2);
        assert_eq!(seed.entities[0].columns.len(), 2);
        assert!(seed.entities[0].columns[0].required);
        assert!(!seed.entities[0].columns[1].required);
        assert_eq!(seed.kind_overrides[0].kind, FieldKind::FreeNumeric);
        assert_eq!(seed.range_overrides[0].max, Some(240));
        assert_eq!(seed.reference.capital, "Vannes");
        assert!(seed.group_overrides.is_empty());
    }

    #[test]
    fn test_invalid_seed_is_reported() {
        let err = SeedSpec::from_json("{").unwrap_err();
        assert!(matches!(err, Error::InvalidSeed(_)));
    }
}
