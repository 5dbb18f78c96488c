//! Catalog bundle - versioned snapshot of the entire catalog.

use super::{
    CodedChoice, FieldDef, GroupDef, Place, PlaceGroup, RangeDef, SubPlace, ValueListEntry,
};
use crate::error::Error;
use rkyv::{Archive, Deserialize, Serialize};

/// A versioned snapshot of the entire catalog.
///
/// Rows are held in `Vec`s in the deterministic order the builder emits
/// them, so two builds from identical seed input serialize to identical
/// bytes.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
pub struct CatalogBundle {
    /// Catalog version (monotonically increasing, set by the store).
    pub version: u64,
    /// Group definitions, in seed order.
    pub groups: Vec<GroupDef>,
    /// Field definitions, in (entity, position) order.
    pub fields: Vec<FieldDef>,
    /// Numeric ranges, at most one per field.
    pub ranges: Vec<RangeDef>,
    /// Coded choices, in field then display order.
    pub choices: Vec<CodedChoice>,
    /// Plain value list entries, in field then sequence order.
    pub values: Vec<ValueListEntry>,
    /// Place groups, in seed order.
    pub place_groups: Vec<PlaceGroup>,
    /// Places, seeded then derived, in insertion order.
    pub places: Vec<Place>,
    /// Sub-places derived from the residence value list.
    pub sub_places: Vec<SubPlace>,
}

impl CatalogBundle {
    /// Create an empty catalog bundle.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            groups: Vec::new(),
            fields: Vec::new(),
            ranges: Vec::new(),
            choices: Vec::new(),
            values: Vec::new(),
            place_groups: Vec::new(),
            places: Vec::new(),
            sub_places: Vec::new(),
        }
    }

    /// Look up a field by (entity, position).
    pub fn field(&self, entity: &str, position: u32) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.entity == entity && f.position == position)
    }

    /// Look up a field by (entity, label).
    pub fn field_by_label(&self, entity: &str, label: &str) -> Option<&FieldDef> {
        self.fields
            .iter()
            .find(|f| f.entity == entity && f.label == label)
    }

    /// All fields of an entity, in position order.
    pub fn fields_of(&self, entity: &str) -> Vec<&FieldDef> {
        self.fields.iter().filter(|f| f.entity == entity).collect()
    }

    /// All fields of a group, in group display order.
    pub fn fields_in_group(&self, group: &str) -> Vec<&FieldDef> {
        let mut fields: Vec<&FieldDef> = self
            .fields
            .iter()
            .filter(|f| f.group.as_deref() == Some(group))
            .collect();
        fields.sort_by_key(|f| f.group_position);
        fields
    }

    /// The numeric range of a field, if one was declared.
    pub fn range_for(&self, entity: &str, position: u32) -> Option<&RangeDef> {
        self.ranges
            .iter()
            .find(|r| r.entity == entity && r.position == position)
    }

    /// Coded choices of a field, in display order.
    pub fn choices_for(&self, entity: &str, position: u32) -> Vec<&CodedChoice> {
        self.choices
            .iter()
            .filter(|c| c.entity == entity && c.position == position)
            .collect()
    }

    /// Resolve a code to its label for a coded field.
    pub fn choice_label(&self, entity: &str, position: u32, code: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.entity == entity && c.position == position && c.code == code)
            .map(|c| c.label.as_str())
    }

    /// Resolve a label back to its code for a coded field. First match in
    /// display order wins.
    pub fn code_for_label(&self, entity: &str, position: u32, label: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.entity == entity && c.position == position && c.label == label)
            .map(|c| c.code.as_str())
    }

    /// Plain value list of a field, in sequence order.
    pub fn values_for(&self, entity: &str, position: u32) -> Vec<&ValueListEntry> {
        self.values
            .iter()
            .filter(|v| v.entity == entity && v.position == position)
            .collect()
    }

    /// Look up a group by name (exact, case- and accent-sensitive).
    pub fn group(&self, name: &str) -> Option<&GroupDef> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Look up a place by name. First match wins.
    pub fn place(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Sub-places of a place, in insertion order.
    pub fn sub_places_of(&self, place: &str) -> Vec<&SubPlace> {
        self.sub_places.iter().filter(|s| s.place == place).collect()
    }

    /// Serialize the bundle to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        rkyv::to_bytes::<rkyv::rancor::Error>(self)
            .map(|v| v.to_vec())
            .map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize a bundle from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        rkyv::from_bytes::<Self, rkyv::rancor::Error>(bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl Default for CatalogBundle {
    fn default() -> Self {
        Self::new(0)
    }
}
