//! Command handlers.
//!
//! Each handler turns parsed arguments into calls on the core services and
//! prints the result. Generation logic lives in `foxx-core`.

use std::path::Path;

use tracing::debug;

use foxx_adapters::{DirectoryAssets, EmbeddedAssets};
use foxx_core::application::ports::AssetProvider;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod completions;
pub mod config;
pub mod init;
pub mod licenses;

/// The asset corpus for this invocation.
///
/// An override directory (the `--assets` flag first, then `assets.dir` from
/// the config) is layered over the embedded assets.
pub(crate) fn asset_provider(
    flag: Option<&Path>,
    config: &AppConfig,
) -> CliResult<Box<dyn AssetProvider>> {
    let Some(dir) = flag.or(config.assets.dir.as_deref()) else {
        return Ok(Box::new(EmbeddedAssets::new()));
    };

    if !dir.is_dir() {
        return Err(CliError::ConfigError {
            message: format!("Asset directory '{}' does not exist", dir.display()),
            source: None,
        });
    }

    debug!(dir = %dir.display(), "Using asset override directory");
    Ok(Box::new(
        DirectoryAssets::new(dir).with_fallback(EmbeddedAssets::new()),
    ))
}
