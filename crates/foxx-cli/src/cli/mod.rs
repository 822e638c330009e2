//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "foxx",
    bin_name = "foxx",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Foxx services for ArangoDB",
    long_about = "foxx generates the files of a new Foxx service: the \
                  manifest, a README, a license, example CRUD routers and \
                  collection lifecycle scripts.",
    after_help = "EXAMPLES:\n\
        \x20 foxx init\n\
        \x20 foxx init my-service --all --collection todos --edge assignments\n\
        \x20 foxx init --answers answers.json --dry-run\n\
        \x20 foxx licenses --format list",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Foxx service.
    #[command(
        about = "Create a new Foxx service",
        after_help = "EXAMPLES:\n\
            \x20 foxx init                              # manifest only, in the current directory\n\
            \x20 foxx init svc --readme --license MIT --license-file\n\
            \x20 foxx init svc --all -C todos -E assignments\n\
            \x20 foxx init --answers answers.json --force"
    )]
    Init(InitArgs),

    /// List bundled license identifiers.
    #[command(
        visible_alias = "ls",
        about = "List available licenses",
        after_help = "EXAMPLES:\n\
            \x20 foxx licenses\n\
            \x20 foxx licenses --format json"
    )]
    Licenses(LicensesArgs),

    /// Manage the foxx configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 foxx config init\n\
            \x20 foxx config get defaults.author_name\n\
            \x20 foxx config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 foxx completions bash > ~/.local/share/bash-completion/completions/foxx\n\
            \x20 foxx completions zsh  > ~/.zfunc/_foxx\n\
            \x20 foxx completions fish > ~/.config/fish/completions/foxx.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `foxx init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Service directory (default: current directory).
    #[arg(value_name = "DIR", help = "Service directory")]
    pub dir: Option<PathBuf>,

    /// Read all answers from a JSON file instead of flags.
    #[arg(
        long = "answers",
        value_name = "FILE",
        help = "Load answers from a JSON file (overrides answer flags)"
    )]
    pub answers: Option<PathBuf>,

    #[arg(long = "name", help = "Service name (default: directory name)")]
    pub name: Option<String>,

    #[arg(
        long = "service-version",
        value_name = "VERSION",
        help = "Service version (default from config: 0.0.0)"
    )]
    pub service_version: Option<String>,

    #[arg(
        long = "engine",
        value_name = "RANGE",
        help = "Supported ArangoDB version range (default from config: ^3.0.0)"
    )]
    pub engine_version: Option<String>,

    #[arg(
        long = "main",
        value_name = "FILE",
        help = "Main file (default: index.js or the first .js file)"
    )]
    pub main_file: Option<String>,

    #[arg(short = 'd', long = "description", help = "Service description")]
    pub description: Option<String>,

    #[arg(long = "author", value_name = "NAME", help = "Author name")]
    pub author_name: Option<String>,

    #[arg(long = "email", value_name = "EMAIL", help = "Author email")]
    pub author_email: Option<String>,

    #[arg(long = "license", value_name = "SPDX", help = "SPDX license identifier")]
    pub license: Option<String>,

    /// Document collections; repeat or separate with commas.
    #[arg(
        short = 'C',
        long = "collection",
        value_name = "NAME",
        value_delimiter = ',',
        help = "Document collection (repeatable)"
    )]
    pub document_collections: Vec<String>,

    /// Edge collections; repeat or separate with commas.
    #[arg(
        short = 'E',
        long = "edge",
        value_name = "NAME",
        value_delimiter = ',',
        help = "Edge collection (repeatable)"
    )]
    pub edge_collections: Vec<String>,

    #[arg(long = "readme", help = "Generate README.md")]
    pub readme: bool,

    #[arg(long = "license-file", help = "Generate a LICENSE file")]
    pub license_file: bool,

    #[arg(long = "routers", help = "Generate an example router per collection")]
    pub routers: bool,

    #[arg(long = "setup", help = "Generate a setup script")]
    pub setup: bool,

    #[arg(long = "teardown", help = "Generate a teardown script")]
    pub teardown: bool,

    /// Enable every generate flag.
    #[arg(short = 'a', long = "all", help = "Generate every optional file")]
    pub all: bool,

    /// Overwrite an existing manifest.
    #[arg(short = 'f', long = "force", help = "Overwrite existing manifest file")]
    pub force: bool,

    /// Print the files instead of writing them.
    #[arg(long = "dry-run", help = "Show the generated files without writing")]
    pub dry_run: bool,

    /// Template and license override directory.
    #[arg(
        long = "assets",
        value_name = "DIR",
        help = "Directory with templates/ and licenses/ overrides"
    )]
    pub assets: Option<PathBuf>,
}

// ── licenses ──────────────────────────────────────────────────────────────────

/// Arguments for `foxx licenses`.
#[derive(Debug, Args)]
pub struct LicensesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    /// Template and license override directory.
    #[arg(long = "assets", value_name = "DIR", help = "Directory with licenses/ overrides")]
    pub assets: Option<PathBuf>,
}

/// Output format for the `licenses` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Identifier and title.
    Table,
    /// One identifier per line.
    List,
    /// JSON array of identifiers.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `foxx completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `foxx config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.engine_version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_init_with_collections() {
        let cli = Cli::parse_from([
            "foxx",
            "init",
            "svc",
            "-C",
            "todos,users",
            "--edge",
            "assignments",
            "--all",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(args.dir, Some(PathBuf::from("svc")));
        assert_eq!(args.document_collections, vec!["todos", "users"]);
        assert_eq!(args.edge_collections, vec!["assignments"]);
        assert!(args.all);
        assert!(!args.dry_run);
    }

    #[test]
    fn licenses_alias_and_format() {
        let cli = Cli::parse_from(["foxx", "ls", "--format", "json"]);
        let Commands::Licenses(args) = cli.command else {
            panic!("expected licenses command");
        };
        assert_eq!(args.format, ListFormat::Json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["foxx", "licenses", "-vv", "--no-color"]);
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.no_color);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["foxx", "--quiet", "--verbose", "licenses"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_requires_subcommand() {
        assert!(Cli::try_parse_from(["foxx", "config"]).is_err());
        assert!(Cli::try_parse_from(["foxx", "config", "get", "output.no_color"]).is_ok());
    }
}
