//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `foxx-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `AssetProvider`: Bundled templates and license texts
//!   - `TemplateRenderer`: Template rendering
//!   - `Filesystem`: File operations (persisting only, never generation)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AssetProvider, Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockAssetProvider, MockFilesystem, MockTemplateRenderer};
