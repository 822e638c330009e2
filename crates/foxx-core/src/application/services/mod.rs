//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a service bundle" or "write it out".

pub mod export_service;
pub mod license_resolver;
pub mod scaffold_service;
pub mod templates;

pub use export_service::ExportService;
pub use license_resolver::LicenseResolver;
pub use scaffold_service::ScaffoldService;
pub use templates::TemplateSet;
