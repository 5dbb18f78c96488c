//! Field registry: the mechanical pass turning the tracked entity
//! definitions into field rows, plus the override tables applied after it.

mod overrides;
mod source;

pub use overrides::{GroupOverride, KindOverride, RangeOverride};
pub use source::{register, ColumnSpec, EntitySpec, NOT_AVAILABLE};
