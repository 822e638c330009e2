//! Asset providers: bundled templates and license texts.

mod directory;
mod embedded;
mod memory;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;
pub use memory::InMemoryAssets;
