//! Application layer for foxx.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, LicenseResolver,
//!   ExportService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Manifest assembly, inflection and license markup
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ExportService, LicenseResolver, ScaffoldService, TemplateSet};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetProvider, Filesystem, TemplateRenderer};

pub use error::ApplicationError;
