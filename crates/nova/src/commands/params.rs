//! `nova params` command implementation.

use std::path::PathBuf;

use clap::Args;
use nova_config::{CliSettings, Config};

use crate::commands::doc_site;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the params command.
#[derive(Args)]
pub(crate) struct ParamsArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover nova.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ParamsArgs {
    /// Print one JSON array of segments per line.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output = Output::new();
        for slug in doc_site(&config).static_params() {
            output.result(&serde_json::to_string(&slug)?)?;
        }
        Ok(())
    }
}
