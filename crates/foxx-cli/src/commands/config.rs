//! `foxx config`: create and inspect the configuration file.

use std::path::Path;

use tracing::debug;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Init { force } => {
            write_default(&AppConfig::active_path(config_file), force, output)?;
        }

        ConfigCommands::Get { key } => {
            let value = config
                .get(&key)
                .ok_or(CliError::UnknownConfigKey { key })?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.data(&AppConfig::active_path(config_file).display().to_string())?;
        }
    }

    Ok(())
}

/// Write the built-in defaults to `path`. An existing file is kept unless
/// `force` is set.
fn write_default(path: &Path, force: bool, output: &OutputManager) -> CliResult<bool> {
    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default())
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }
    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;
    debug!(path = %path.display(), "Default configuration written");

    output.success(&format!("Configuration created at {}", path.display()))?;
    Ok(true)
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use std::fs;
    use tempfile::TempDir;

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn writes_defaults_once() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let output = quiet_output();

        assert!(write_default(&path, false, &output).unwrap());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("engine_version = \"^3.0.0\""));

        fs::write(&path, "# edited").unwrap();
        assert!(!write_default(&path, false, &output).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "# edited");

        assert!(write_default(&path, true, &output).unwrap());
        assert_ne!(fs::read_to_string(&path).unwrap(), "# edited");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let result = execute(
            ConfigCommands::Get {
                key: "does.not.exist".into(),
            },
            None,
            AppConfig::default(),
            &quiet_output(),
        );
        assert!(matches!(result, Err(CliError::UnknownConfigKey { .. })));
    }
}
