//! `nova render` command implementation.

use std::path::PathBuf;

use clap::Args;
use nova_config::{CliSettings, Config};
use nova_docs::{DocError, Slug};

use crate::commands::doc_site;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Slug to render (e.g. "governance/tokenomics").
    slug: String,

    /// Print the rendered document as JSON instead of a full HTML page.
    #[arg(long)]
    json: bool,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover nova.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = doc_site(&config);

        let text = if self.json {
            serde_json::to_string_pretty(&site.render_path(&self.slug)?)?
        } else {
            site.page_html(&Slug::parse(&self.slug).map_err(DocError::from)?)?
        };

        Output::new().result(&text)?;
        Ok(())
    }
}
