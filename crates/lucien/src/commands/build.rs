//! `lucien build` command implementation.

use std::path::PathBuf;

use clap::Args;
use lucien_config::{CliSettings, Config};
use lucien_seo::SiteContext;
use lucien_sitegen::StaticSiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Base HTML template (default: dist/index.html next to the config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory for the generated pages (default: the template's directory).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Canonical site origin (overrides config).
    #[arg(long, env = "SITE_URL")]
    origin: Option<String>,

    /// Brand name for titles and structured data (overrides config).
    #[arg(long, env = "SITE_BRAND")]
    brand: Option<String>,

    /// Path to configuration file (default: auto-discover lucien.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            origin: self.origin,
            brand: self.brand,
            template: self.template,
            output_dir: self.out,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let context = SiteContext::new(config.site.origin.as_str(), config.site.brand.as_str());

        let template = &config.build_resolved.template;
        let output_dir = &config.build_resolved.output_dir;

        output.info(&format!("Template: {}", template.display()));
        output.info(&format!("Output: {}", output_dir.display()));
        output.info(&format!("Origin: {}", context.origin()));

        let builder = StaticSiteBuilder::from_template_file(context, template)?;
        let summary = builder.build(output_dir)?;

        output.success(&format!(
            "Generated {} pages, sitemap.xml, and robots.txt in {}",
            summary.pages.len(),
            output_dir.display()
        ));
        Ok(())
    }
}
