//! `nova build` command implementation.

use std::path::PathBuf;

use clap::Args;
use nova_build::{BuildConfig, StaticSiteBuilder};
use nova_config::{CliSettings, Config};

use crate::commands::{site_config, storage};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover nova.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (info-level logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let builder = StaticSiteBuilder::new(
            storage(&config.docs_resolved.source_dir),
            BuildConfig {
                site: site_config(&config),
            },
        );
        let report = builder.build(output_dir)?;

        for slug in &report.skipped {
            output.warning(&format!("Skipped /docs/{slug}: failed to render"));
        }
        output.success(&format!(
            "Built {} pages to {}",
            report.pages_written,
            output_dir.display()
        ));
        Ok(())
    }
}
