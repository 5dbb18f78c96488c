//! Intake Catalog Core - catalog model, builder, and sled-backed store.
//!
//! The catalog describes how to present and validate the three tracked
//! intake entities (interview, request, resolution): per-field metadata,
//! numeric ranges, coded choices, plain value lists, and the geographic
//! reference hierarchy linked to the residence field. It is rebuilt from
//! scratch on each run from a static seed, never updated in place.

pub mod build;
pub mod catalog;
pub mod error;
pub mod reference;
pub mod registry;
pub mod seed;

pub use build::{build, BuildReport, Diagnostic};
pub use catalog::{
    Catalog, CatalogBundle, CodedChoice, FieldDef, FieldKind, GroupDef, Place, PlaceGroup,
    RangeDef, SubPlace, ValueListEntry,
};
pub use error::Error;
pub use registry::{register, ColumnSpec, EntitySpec, GroupOverride, KindOverride, RangeOverride};
pub use seed::{FieldLocator, Membership, ReferenceSeed, SeedSpec};
