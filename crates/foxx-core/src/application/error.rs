//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports (asset
//! lookup, rendering, persistence), not domain invariants. Domain errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during generation or persistence.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A required template has no bundled asset.
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// No bundled license text exists for the SPDX identifier.
    #[error("License not found: {id}")]
    LicenseNotFound { id: String },

    /// A template could not be rendered against its context.
    #[error("Failed to render template '{template}': {reason}")]
    Render { template: String, reason: String },

    /// Asset corpus could not be read.
    #[error("Asset error at {path}: {reason}")]
    AssetError { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Internal lock poisoned")]
    LockError,

    /// A manifest already exists where the service would be written.
    #[error("Manifest already exists at {path}")]
    ManifestExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name } => vec![
                format!("The template '{}' is missing from the asset corpus", name),
                "If FOXX_ASSETS__DIR is set, check that it contains templates/<name>.tpl".into(),
                "Otherwise this is a packaging defect, please report it".into(),
            ],
            Self::LicenseNotFound { id } => vec![
                format!("No bundled license text for '{}'", id),
                "Try: foxx licenses to see the available identifiers".into(),
                "Or generate a license file without an SPDX id (--license-file)".into(),
            ],
            Self::Render { template, .. } => vec![
                format!("Template '{}' does not match its render context", template),
                "Check custom templates for misspelled variables or unbalanced blocks".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ManifestExists { path } => vec![
                format!("A manifest already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Or run the command in an empty directory".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::LicenseNotFound { .. } => ErrorCategory::NotFound,
            Self::Render { .. } => ErrorCategory::Internal,
            Self::AssetError { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::LockError => ErrorCategory::Internal,
            Self::ManifestExists { .. } => ErrorCategory::Validation,
        }
    }
}
