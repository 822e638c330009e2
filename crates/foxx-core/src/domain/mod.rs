// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for foxx.
//!
//! This module contains the pure parts of the scaffold generator: the
//! answers model, manifest assembly, noun inflection, license markup
//! stripping, render contexts and the artifact set.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or asset lookups
//! - **Immutable entities**: Everything is rebuilt per generation call
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod inflection;
pub mod license;

// Re-exports for convenience
pub use entities::{
    answers::{ConfigAnswers, LicenseChoice},
    artifact::{ArtifactSet, FileArtifact},
    collection::CollectionNamePair,
    manifest::{LICENSE_FILE_SENTINEL, MANIFEST_FILE, ManifestDescriptor},
    template::{RenderContext, TemplateName},
};

pub use error::{DomainError, ErrorCategory};
pub use inflection::{InflectedName, Inflector, inflect};
