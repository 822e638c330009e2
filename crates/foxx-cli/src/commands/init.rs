//! Implementation of the `foxx init` command.
//!
//! Responsibility: turn flags (or an answers file) into `ConfigAnswers`,
//! run the generator and either print or write the result.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::json;
use tracing::{debug, info, instrument};

use foxx_adapters::{LocalFilesystem, SimpleRenderer};
use foxx_core::{
    application::{ExportService, ScaffoldService},
    domain::{ArtifactSet, ConfigAnswers, LicenseChoice, MANIFEST_FILE},
};

use crate::{
    cli::{GlobalArgs, InitArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const DEFAULT_MAIN_FILE: &str = "index.js";

/// Execute the `foxx init` command.
///
/// 1. Resolve the service directory
/// 2. Build answers from `--answers` or from flags and config defaults
/// 3. Generate the artifact set
/// 4. Print it (`--dry-run`) or write it under the service directory
#[instrument(skip_all, fields(dir = ?args.dir))]
pub fn execute(
    args: InitArgs,
    global: &GlobalArgs,
    config: AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let root = match &args.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().with_cli_context(|| "Failed to read current directory")?,
    };

    let mut answers = match &args.answers {
        Some(path) => load_answers(path)?,
        None => answers_from_flags(&args, &config, &root)?,
    };
    if args.all {
        answers = answers.with_all_generators();
    }
    validate_answers(&answers)?;
    debug!(name = %answers.name, main = %answers.main_file, "Answers resolved");

    let assets = super::asset_provider(args.assets.as_deref(), &config)?;
    let service = ScaffoldService::new(assets, Box::new(SimpleRenderer::new()));
    let artifacts = service.generate(&answers)?;
    info!(files = artifacts.len(), "Service generated");

    if args.dry_run {
        return print_artifacts(&artifacts, output);
    }

    if args.force && global.verbose > 0 && root.join(MANIFEST_FILE).exists() {
        output.warning("Overwriting existing manifest file.")?;
    }

    let exporter = ExportService::new(Box::new(LocalFilesystem::new()));
    let written = exporter.write(&root, &artifacts, args.force)?;
    info!(written = written.len(), root = %root.display(), "Service written");

    if output.format() == OutputFormat::Json {
        let files: Vec<&str> = artifacts.names().collect();
        output.data(&json!({ "root": root.display().to_string(), "files": files }).to_string())?;
        return Ok(());
    }

    output.success(&format!(
        "Created Foxx service '{}' in {}",
        answers.name,
        root.display()
    ))?;
    for name in artifacts.names() {
        output.print(&format!("  {name}"))?;
    }

    Ok(())
}

// ── Answers ───────────────────────────────────────────────────────────────────

fn load_answers(path: &Path) -> CliResult<ConfigAnswers> {
    let raw = fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read answers file '{}'", path.display()))?;

    serde_json::from_str(&raw).map_err(|source| CliError::InvalidAnswers {
        path: path.to_path_buf(),
        source,
    })
}

/// Answers from flags, falling back to config defaults, the directory name
/// and the main file found in the directory.
fn answers_from_flags(
    args: &InitArgs,
    config: &AppConfig,
    root: &Path,
) -> CliResult<ConfigAnswers> {
    let defaults = &config.defaults;

    let name = match &args.name {
        Some(name) => name.clone(),
        None => directory_name(root)?,
    };
    let mut answers = ConfigAnswers::new(
        name,
        args.service_version
            .clone()
            .unwrap_or_else(|| defaults.version.clone()),
        args.engine_version
            .clone()
            .unwrap_or_else(|| defaults.engine_version.clone()),
        args.main_file
            .clone()
            .unwrap_or_else(|| detect_main_file(root)),
    );

    answers.description = args.description.clone();
    answers.author_name = args
        .author_name
        .clone()
        .or_else(|| defaults.author_name.clone());
    answers.author_email = args
        .author_email
        .clone()
        .or_else(|| defaults.author_email.clone());
    answers.license = args
        .license
        .clone()
        .or_else(|| defaults.license.clone())
        .map(LicenseChoice::new);

    answers.generate_license = args.license_file;
    answers.generate_readme = args.readme;
    answers.generate_example_routers = args.routers;
    answers.generate_setup = args.setup;
    answers.generate_teardown = args.teardown;
    answers.document_collections = args.document_collections.clone();
    answers.edge_collections = args.edge_collections.clone();

    Ok(answers)
}

fn validate_answers(answers: &ConfigAnswers) -> CliResult<()> {
    let required = [
        ("name", &answers.name),
        ("version", &answers.version),
        ("engineVersion", &answers.engine_version),
        ("mainFile", &answers.main_file),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(CliError::InvalidInput {
                message: format!("'{field}' must not be empty"),
                source: None,
            });
        }
    }
    Ok(())
}

fn directory_name(root: &Path) -> CliResult<String> {
    let absolute: PathBuf =
        std::path::absolute(root).with_cli_context(|| "Failed to resolve service directory")?;

    absolute
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidInput {
            message: format!(
                "cannot derive a service name from '{}', pass --name",
                root.display()
            ),
            source: None,
        })
}

/// `index.js` if present, otherwise the alphabetically first non-hidden
/// `.js` file, otherwise `index.js`.
fn detect_main_file(root: &Path) -> String {
    if root.join(DEFAULT_MAIN_FILE).is_file() {
        return DEFAULT_MAIN_FILE.into();
    }

    let Ok(entries) = fs::read_dir(root) else {
        return DEFAULT_MAIN_FILE.into();
    };

    entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| !name.starts_with('.') && name.ends_with(".js"))
        .min()
        .unwrap_or_else(|| DEFAULT_MAIN_FILE.into())
}

// ── Dry run ───────────────────────────────────────────────────────────────────

fn print_artifacts(artifacts: &ArtifactSet, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let files: Vec<_> = artifacts
            .iter()
            .map(|a| json!({ "name": a.name, "content": a.content }))
            .collect();
        output.data(&format!("{:#}", json!(files)))?;
        return Ok(());
    }

    for artifact in artifacts {
        output.data("")?;
        output.data(&artifact.name)?;
        output.data(&"-".repeat(artifact.name.chars().count()))?;
        output.data(&artifact.content)?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use tempfile::TempDir;

    fn init_args(extra: &[&str]) -> InitArgs {
        let argv = ["foxx", "init"].into_iter().chain(extra.iter().copied());
        match Cli::parse_from(argv).command {
            Commands::Init(args) => args,
            other => panic!("expected init, got {other:?}"),
        }
    }

    // ── detect_main_file ──────────────────────────────────────────────────────

    #[test]
    fn index_js_wins_when_present() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.js"), "").unwrap();
        fs::write(temp.path().join("app.js"), "").unwrap();
        assert_eq!(detect_main_file(temp.path()), "index.js");
    }

    #[test]
    fn first_visible_js_file_otherwise() {
        let temp = TempDir::new().unwrap();
        for name in [".hidden.js", "zeta.js", "main.js", "notes.txt"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        assert_eq!(detect_main_file(temp.path()), "main.js");
    }

    #[test]
    fn missing_directory_defaults_to_index() {
        let temp = TempDir::new().unwrap();
        assert_eq!(detect_main_file(&temp.path().join("nope")), "index.js");
    }

    // ── answers ───────────────────────────────────────────────────────────────

    #[test]
    fn name_defaults_to_directory_name() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("hello-service");
        let answers = answers_from_flags(&init_args(&[]), &AppConfig::default(), &root).unwrap();

        assert_eq!(answers.name, "hello-service");
        assert_eq!(answers.version, "0.0.0");
        assert_eq!(answers.engine_version, "^3.0.0");
        assert_eq!(answers.main_file, "index.js");
        assert!(!answers.generate_readme);
    }

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.author_name = Some("Config Author".into());
        config.defaults.license = Some("ISC".into());

        let args = init_args(&[
            "--name",
            "svc",
            "--author",
            "Jane Doe",
            "--readme",
            "-C",
            "todos",
            "-E",
            "assignments",
        ]);
        let answers = answers_from_flags(&args, &config, Path::new("unused")).unwrap();

        assert_eq!(answers.name, "svc");
        assert_eq!(answers.author_name(), Some("Jane Doe"));
        assert_eq!(answers.license_id(), Some("ISC"));
        assert!(answers.generate_readme);
        assert_eq!(answers.document_collections, vec!["todos"]);
        assert_eq!(answers.edge_collections, vec!["assignments"]);
    }

    #[test]
    fn answers_file_is_parsed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        fs::write(
            &path,
            r#"{ "name": "svc", "version": "1.0.0", "engineVersion": "^3.0.0",
                 "mainFile": "index.js", "generateReadMe": true }"#,
        )
        .unwrap();

        let answers = load_answers(&path).unwrap();
        assert_eq!(answers.name, "svc");
        assert!(answers.generate_readme);
    }

    #[test]
    fn malformed_answers_file_is_user_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("answers.json");
        fs::write(&path, r#"{ "name": "svc" }"#).unwrap();

        let err = load_answers(&path).unwrap_err();
        assert!(matches!(err, CliError::InvalidAnswers { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn empty_required_answer_is_rejected() {
        let answers = ConfigAnswers::new("svc", "", "^3.0.0", "index.js");
        assert!(matches!(
            validate_answers(&answers),
            Err(CliError::InvalidInput { .. })
        ));
    }
}
