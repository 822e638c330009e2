pub mod answers;
pub mod artifact;
pub mod collection;
pub mod manifest;
pub mod template;

pub use crate::domain::DomainError;
pub use answers::{ConfigAnswers, LicenseChoice};
pub use artifact::{ArtifactSet, FileArtifact};
pub use collection::CollectionNamePair;
pub use manifest::ManifestDescriptor;
pub use template::{RenderContext, TemplateName};
