//! Template rendering adapters.

mod simple;
pub mod syntax;

pub use simple::SimpleRenderer;
pub use syntax::TemplateError;
