//! Parsed annotation structures.

/// A fully parsed column annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Clean display label (text before the enumeration).
    pub label: String,
    /// Group tag, if the annotation carried one.
    pub group: Option<String>,
    /// The enumerated allowed values, if any.
    pub values: Enumeration,
}

/// The enumerated values of an annotation.
///
/// An annotation yields either coded pairs or plain values, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enumeration {
    /// No enumeration, or an empty `()` body.
    Empty,
    /// `code : description` pairs, in source order.
    Coded(Vec<CodePair>),
    /// Bare labels, in source order.
    Plain(Vec<String>),
}

/// One `code : description` pair of a coded enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePair {
    /// Machine code stored in the record.
    pub code: String,
    /// Human-readable description shown to the user.
    pub description: String,
}

impl Enumeration {
    /// Check whether the enumeration carries no values.
    pub fn is_empty(&self) -> bool {
        match self {
            Enumeration::Empty => true,
            Enumeration::Coded(pairs) => pairs.is_empty(),
            Enumeration::Plain(values) => values.is_empty(),
        }
    }

    /// Number of enumerated values.
    pub fn len(&self) -> usize {
        match self {
            Enumeration::Empty => 0,
            Enumeration::Coded(pairs) => pairs.len(),
            Enumeration::Plain(values) => values.len(),
        }
    }
}

impl CodePair {
    /// Create a new code pair.
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
        }
    }
}
