//! Semantic catalog for the intake entities.
//!
//! The catalog stores presentation and validation metadata: groups, field
//! definitions, numeric ranges, coded choices, plain value lists, and the
//! geographic reference hierarchy.

mod bundle;
mod choice;
mod field;
mod group;
mod place;
mod range;
mod store;
mod types;

pub use bundle::CatalogBundle;
pub use choice::{CodedChoice, ValueListEntry};
pub use field::FieldDef;
pub use group::GroupDef;
pub use place::{Place, PlaceGroup, SubPlace};
pub use range::{RangeDef, DEFAULT_BOUNDS};
pub use store::Catalog;
pub use types::FieldKind;
