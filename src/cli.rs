//! Command-line surface and the check pipeline

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use crate::config::{
    API_URL_ENV, ApiConfig, DEFAULT_API_URL, DEFAULT_MANIFEST, EXPORT_FILE, MacosVersion,
};
use crate::parser::brewfile::{ManifestError, read_packages};
use crate::parser::types::PackageKind;
use crate::report;
use crate::version::checker::Checker;

#[derive(Debug, Parser)]
#[command(name = "brew-compat")]
#[command(
    version,
    about = "Check compatibility of brew formula against macOS versions"
)]
pub struct Cli {
    /// Path to Brewfile
    #[arg(default_value = DEFAULT_MANIFEST)]
    pub brewfile: PathBuf,

    /// macOS version
    #[arg(long, value_enum, default_value_t = MacosVersion::BigSur)]
    pub macos_version: MacosVersion,

    /// Use verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Export results in CSV format
    #[arg(long)]
    pub export: bool,

    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

/// Read the Brewfile, check every formula then every cask, and report
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.brewfile.exists() {
        return Err(ManifestError::NotFound(cli.brewfile.clone()).into());
    }

    info!("Brewfile exists!");
    info!("Using Brewfile: {}", cli.brewfile.display());
    info!("Checking compatibility for {}", cli.macos_version);

    let checker = Checker::from_config(&ApiConfig::new(&cli.api_url))
        .context("Failed to create HTTP client")?;

    let mut declared = Vec::with_capacity(PackageKind::ALL.len());
    for kind in PackageKind::ALL {
        checker.ensure_supported(kind)?;
        let names = read_packages(&cli.brewfile, kind)?;
        debug!("The {} formulae are: [{}]", kind, names.join(", "));
        declared.push((kind, names));
    }

    info!("Getting details from Homebrew API for formulae, hold on...");
    let mut records = Vec::new();
    for (kind, names) in &declared {
        records.extend(checker.evaluate(names, *kind, cli.macos_version).await?);
    }

    report::render(&records).context("Failed to print results")?;

    if cli.export {
        report::write_csv(&records, Path::new(EXPORT_FILE))
            .with_context(|| format!("Failed to write {}", EXPORT_FILE))?;
        info!("Exported results to {}", EXPORT_FILE);
    }

    debug!("FIN.");
    Ok(())
}
