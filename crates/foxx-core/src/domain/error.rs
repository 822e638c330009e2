// ============================================================================
// domain/error.rs - DOMAIN INVARIANT VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Domain errors describe inputs or results that break a domain invariant.
/// They are cloneable and categorizable like every other error in the core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Duplicate artifact name: {name}")]
    DuplicateArtifact { name: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Artifact path leaves the service root: {path}")]
    PathEscapesRoot { path: String },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Invalid render context: {0}")]
    InvalidContext(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateArtifact { name } => vec![
                format!("Two generated files share the path '{}'", name),
                "Check that no collection is listed twice, or as both a document and an edge collection".into(),
            ],
            Self::PathEscapesRoot { path } => vec![
                format!("'{}' contains '.', '..' or an empty segment", path),
                "Collection names must be plain names such as 'todos'".into(),
            ],
            Self::UnknownTemplate(name) => vec![
                format!("'{}' is not one of the bundled templates", name),
                "Known templates: README.md, LICENSE, router.js, setup.js, teardown.js".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateArtifact { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate(_) => ErrorCategory::NotFound,
            Self::InvalidContext(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
