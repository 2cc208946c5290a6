use std::path::PathBuf;

use colored::Colorize;
use eyre::{bail, Result};
use paperconf::schema::{format_errors, validate_config};
use paperconf::PaperConfig;
use tracing::{info, instrument, warn};

use super::resolve_config_path;

/// Loads and validates the site configuration.
///
/// Validation issues fail the command unless `as_warnings` is set, in which case
/// they are only reported.
#[instrument(skip(path))]
pub async fn check(path: Option<PathBuf>, as_warnings: bool) -> Result<()> {
    let path = resolve_config_path(path).await?;
    let config = PaperConfig::load(&path).await?;

    let errors = validate_config(&config);
    if errors.is_empty() {
        info!("{} {}", "Site configuration is valid:".bold(), path.display());
        return Ok(());
    }

    let report = format_errors(&path, &errors, as_warnings);
    if as_warnings {
        warn!("{}", report.trim_end());
        return Ok(());
    }
    bail!("{}", report.trim_end());
}
