//! `lucien routes` command implementation.

use std::path::PathBuf;

use clap::Args;
use lucien_config::{CliSettings, Config};
use lucien_content as content;
use lucien_routes::{Language, Route, Section};
use lucien_seo::SiteContext;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Canonical site origin (overrides config).
    #[arg(long, env = "SITE_URL")]
    origin: Option<String>,

    /// Path to configuration file (default: auto-discover lucien.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            origin: self.origin,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let context = SiteContext::new(config.site.origin.as_str(), config.site.brand.as_str());

        for language in Language::ALL {
            output.highlight(&format!(
                "{} ({})",
                content::language_name(language),
                language.tag()
            ));
            for section in Section::ALL {
                let route = Route::new(section, language);
                let entry = content::entry(section, language);
                output.info(&format!("  {}  {}", context.url_for(route), entry.title));
            }
        }
        Ok(())
    }
}
