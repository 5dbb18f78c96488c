//! Intake Annotation Grammar
//!
//! This crate parses the structured annotation strings attached to the
//! columns of the tracked intake entities. An annotation mixes a free-text
//! label, an optional parenthesized enumeration, and an optional trailing
//! group tag:
//!
//! ```text
//! Situation (1 : Single;2 : Married), Group Applicant
//! Residence (Vannes Downtown;Auray;Outside Morbihan), Group Applicant
//! Duration
//! ```
//!
//! The enumeration is either a semicolon-delimited list of
//! `code : description` pairs (coded form) or a semicolon-delimited list of
//! bare labels (plain form). Mixing the two forms in one annotation is a
//! parse error; the caller is expected to recover and keep building.
//!
//! # Usage
//!
//! ```rust
//! use intake_annot::{parse, Enumeration};
//!
//! let ann = parse("Situation (1 : Single;2 : Married), Group Applicant").unwrap();
//! assert_eq!(ann.label, "Situation");
//! assert_eq!(ann.group.as_deref(), Some("Applicant"));
//! match ann.values {
//!     Enumeration::Coded(pairs) => assert_eq!(pairs.len(), 2),
//!     _ => panic!("expected coded enumeration"),
//! }
//! ```

mod annotation;
mod error;
mod parser;

pub use annotation::{Annotation, CodePair, Enumeration};
pub use error::AnnotationError;
pub use parser::{group_of, parse, GROUP_MARKER};
