//! Foxx Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers of the foxx
//! service scaffold generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             foxx-cli (CLI)              │
//! │      (answers, dry-run, persisting)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, LicenseResolver,     │
//! │   ExportService)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (AssetProvider, TemplateRenderer,      │
//! │   Filesystem)                           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     foxx-adapters (Infrastructure)      │
//! │  (EmbeddedAssets, SimpleRenderer,       │
//! │   LocalFilesystem, ...)                 │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ConfigAnswers, ManifestDescriptor,    │
//! │   Inflector, ArtifactSet)               │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use foxx_core::prelude::*;
//!
//! let service = ScaffoldService::new(Box::new(assets), Box::new(renderer));
//!
//! let mut answers = ConfigAnswers::new("hello-service", "1.0.0", "^3.0.0", "index.js");
//! answers.generate_readme = true;
//!
//! for artifact in service.generate(&answers)? {
//!     println!("{}", artifact.name);
//! }
//! ```

// Domain layer (pure logic)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ExportService, LicenseResolver, ScaffoldService, TemplateSet,
        ports::{AssetProvider, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactSet, CollectionNamePair, ConfigAnswers, FileArtifact, LicenseChoice,
        ManifestDescriptor, RenderContext, TemplateName,
    };
    pub use crate::error::{ErrorCategory, FoxxError, FoxxResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
