//! Unified error handling for foxx core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for foxx core operations.
///
/// Every generation failure is fatal to the call and is returned unchanged to
/// the caller; nothing in the core retries or degrades.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FoxxError {
    /// Errors from the domain layer (invariant violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (asset, render and persistence
    /// failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl FoxxError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The application error, if this is one.
    pub fn as_application(&self) -> Option<&ApplicationError> {
        match self {
            Self::Application(e) => Some(e),
            Self::Domain(_) => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type FoxxResult<T> = Result<T, FoxxError>;
