//! Error types for annotation parsing.

use thiserror::Error;

/// Error raised for a malformed annotation.
///
/// These are recoverable: the caller skips the field's enumeration and
/// continues with the rest of the catalog build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    /// An opening `(` without a matching `)`.
    #[error("unterminated enumeration: missing ')' after '('")]
    UnterminatedEnumeration,

    /// Coded and plain fragments mixed in one enumeration.
    #[error("mixed coded and plain fragments in enumeration near '{fragment}'")]
    MixedEnumeration {
        /// The first fragment that broke the coded form.
        fragment: String,
    },
}
