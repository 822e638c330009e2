//! Implementation of the `foxx licenses` command.

use serde_json::json;

use foxx_core::{application::ports::AssetProvider, domain::license};

use crate::{
    cli::{LicensesArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const TITLE_WIDTH: usize = 48;

pub fn execute(args: LicensesArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let assets = super::asset_provider(args.assets.as_deref(), config)?;
    let ids = assets.license_ids()?;

    // `--output-format json` applies to every command.
    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available licenses:")?;
            for id in &ids {
                let title = title(assets.as_ref(), id)?;
                output.print(&format!("  {id:<14} {title}"))?;
            }
        }
        ListFormat::List => {
            for id in &ids {
                output.data(id)?;
            }
        }
        ListFormat::Json => {
            output.data(&format!("{:#}", json!(ids)))?;
        }
    }

    Ok(())
}

/// First line of the license text, shortened for the table.
fn title(assets: &dyn AssetProvider, id: &str) -> CliResult<String> {
    let text = license::strip_markup(&assets.license(id)?);
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    if first.chars().count() <= TITLE_WIDTH {
        return Ok(first.to_string());
    }
    let short: String = first.chars().take(TITLE_WIDTH - 3).collect();
    Ok(format!("{}...", short.trim_end()))
}
