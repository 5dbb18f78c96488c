//! Core error types.

use thiserror::Error;

/// Fatal catalog errors.
///
/// Recoverable conditions (malformed annotations, unresolved groups) are
/// collected as [`crate::build::Diagnostic`]s instead; everything here
/// aborts the build and leaves the store untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage layer error.
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Two fields collided on (entity, position) or (entity, label).
    /// Signals a schema-definition bug in the seed.
    #[error("duplicate field key: entity '{entity}', {key}")]
    DuplicateKey {
        /// Owning entity name.
        entity: String,
        /// Human-readable description of the colliding key.
        key: String,
    },

    /// A sub-place referenced a capital place that was never seeded.
    /// Downstream geographic joins would silently be wrong, so this is fatal.
    #[error("missing reference entity: no place named '{name}'")]
    MissingReferenceEntity {
        /// Name of the absent place.
        name: String,
    },

    /// Malformed seed configuration.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}
