//! Build diagnostics.
//!
//! Parsing-level issues are recovered locally: the affected field loses
//! its enumeration or group, a diagnostic is recorded here, and the build
//! continues. Nothing is ever swallowed without one.

use crate::catalog::FieldKind;
use std::fmt;

/// One non-fatal condition observed during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A field's annotation could not be parsed; its enumeration was
    /// skipped.
    MalformedAnnotation {
        /// Owning entity name.
        entity: String,
        /// Field label.
        label: String,
        /// Parser message.
        reason: String,
    },
    /// A field's group tag was missing or matched no known group.
    UnresolvedGroup {
        /// Owning entity name.
        entity: String,
        /// Field label.
        label: String,
        /// The unmatched tag, or `None` when the marker was absent.
        tag: Option<String>,
    },
    /// A coded enumeration was found on a field whose override
    /// reclassified it to a non-coded kind. The override wins; the
    /// enumeration was skipped.
    KindConflict {
        /// Owning entity name.
        entity: String,
        /// Field label.
        label: String,
        /// The overriding kind.
        kind: FieldKind,
    },
    /// A seed entry referenced a field that was never registered.
    UnknownFieldReference {
        /// Referenced entity name.
        entity: String,
        /// Referenced column name.
        column: String,
        /// Which seed table held the reference.
        context: &'static str,
    },
    /// Two range overrides targeted the same field; the first one won.
    DuplicateRange {
        /// Owning entity name.
        entity: String,
        /// Field label.
        label: String,
    },
    /// A membership entry referenced an unknown place or place group.
    UnknownMembership {
        /// Referenced place name.
        place: String,
        /// Referenced place group name.
        group: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedAnnotation {
                entity,
                label,
                reason,
            } => write!(
                f,
                "malformed annotation on {entity}.{label}: {reason}; enumeration skipped"
            ),
            Diagnostic::UnresolvedGroup {
                entity,
                label,
                tag: Some(tag),
            } => write!(f, "unresolved group '{tag}' on {entity}.{label}"),
            Diagnostic::UnresolvedGroup {
                entity,
                label,
                tag: None,
            } => write!(f, "no group tag on {entity}.{label}"),
            Diagnostic::KindConflict {
                entity,
                label,
                kind,
            } => write!(
                f,
                "coded enumeration on {entity}.{label} conflicts with overridden kind {kind}; enumeration skipped"
            ),
            Diagnostic::UnknownFieldReference {
                entity,
                column,
                context,
            } => write!(f, "{context} references unknown field {entity}.{column}"),
            Diagnostic::DuplicateRange { entity, label } => {
                write!(f, "duplicate range declared for {entity}.{label}; first kept")
            }
            Diagnostic::UnknownMembership { place, group } => {
                write!(f, "membership '{place}' -> '{group}' references an unknown name")
            }
        }
    }
}

/// Collected diagnostics of one catalog build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    diagnostics: Vec<Diagnostic>,
}

impl BuildReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn warn(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// All recorded diagnostics, in build order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether the build completed without a single diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
