//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generator needs from the outside world.
//! The `foxx-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, TemplateName};
use crate::error::FoxxResult;

/// Port for the read-only asset corpus (templates and license texts).
///
/// Implemented by:
/// - `foxx_adapters::assets::EmbeddedAssets` (compiled-in corpus)
/// - `foxx_adapters::assets::DirectoryAssets` (override directory)
/// - `foxx_adapters::assets::InMemoryAssets` (testing)
///
/// Providers are shared across render workers, so lookups must not mutate
/// anything observable.
#[cfg_attr(test, mockall::automock)]
pub trait AssetProvider: Send + Sync {
    /// Source text of a named template.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` if the corpus has no
    /// such template.
    fn template(&self, name: TemplateName) -> FoxxResult<String>;

    /// Raw (still marked-up) license text for an SPDX identifier.
    ///
    /// Fails with `ApplicationError::LicenseNotFound` if the identifier is
    /// not in the corpus.
    fn license(&self, id: &str) -> FoxxResult<String>;

    /// Every SPDX identifier in the corpus, sorted.
    fn license_ids(&self) -> FoxxResult<Vec<String>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `foxx_adapters::renderer::SimpleRenderer` (built-in mini language)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render template `source` against `context`.
    ///
    /// `name` is only used for error reporting. Fails with
    /// `ApplicationError::Render` when the template needs a variable the
    /// context does not have.
    fn render(
        &self,
        name: TemplateName,
        source: &str,
        context: &RenderContext,
    ) -> FoxxResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `foxx_adapters::filesystem::LocalFilesystem` (production)
/// - `foxx_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> FoxxResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> FoxxResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> FoxxResult<()>;
}
