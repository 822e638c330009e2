//! Infrastructure adapters for foxx.
//!
//! This crate implements the ports defined in `foxx_core::application::ports`.
//! It contains all external dependencies and I/O operations: the asset
//! corpus, the template engine and the filesystem.

pub mod assets;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use assets::{DirectoryAssets, EmbeddedAssets, InMemoryAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{SimpleRenderer, TemplateError};
