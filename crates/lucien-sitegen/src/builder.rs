//! Route-by-route page generation.

use std::fs;
use std::path::{Path, PathBuf};

use lucien_routes::Route;
use lucien_seo::{SiteContext, sync_head};

use crate::fallback::fallback_block;
use crate::html::HtmlDocument;
use crate::sitemap::{robots_txt, sitemap_xml};

/// Error returned when static generation fails.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Template lacks a marker the rewrite relies on.
    #[error("Template is missing {0}")]
    TemplateMarker(&'static str),
    /// An output file or directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a completed build wrote.
#[derive(Debug)]
pub struct BuildSummary {
    /// Every page file, in generation order.
    pub pages: Vec<PathBuf>,
    pub sitemap_path: PathBuf,
    pub robots_path: PathBuf,
}

/// Renders one self-contained page per route from a single template.
///
/// The template is the client bundle's shell; every page is that shell
/// with its head rewritten for the route and the fallback block swapped
/// for route-language content.
#[derive(Debug, Clone)]
pub struct StaticSiteBuilder {
    context: SiteContext,
    template: String,
}

impl StaticSiteBuilder {
    /// Wrap a template already in memory.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::TemplateMarker` when the template lacks a
    /// `</head>` or the fallback sentinels.
    pub fn new(context: SiteContext, template: impl Into<String>) -> Result<Self, BuildError> {
        let template = template.into();
        let probe = HtmlDocument::new(template.as_str());
        if !probe.has_head() {
            return Err(BuildError::TemplateMarker("</head>"));
        }
        if !probe.has_fallback_block() {
            return Err(BuildError::TemplateMarker("the fallback sentinels"));
        }
        Ok(Self { context, template })
    }

    /// Read the template from disk.
    pub fn from_template_file(context: SiteContext, path: &Path) -> Result<Self, BuildError> {
        let template = fs::read_to_string(path).map_err(|source| BuildError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(context, template)
    }

    #[must_use]
    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    /// Render the full page for one route.
    #[must_use]
    pub fn render_route(&self, route: Route) -> String {
        let mut document = HtmlDocument::new(self.template.as_str());
        sync_head(&mut document, route, &self.context);
        document.replace_fallback(&fallback_block(route.language, &self.context));
        document.into_html()
    }

    /// Render and write every route, then the sitemap and robots.txt.
    ///
    /// The first filesystem error aborts the run; a partially generated
    /// site is never reported as success.
    pub fn build(&self, output_dir: &Path) -> Result<BuildSummary, BuildError> {
        let mut pages = Vec::with_capacity(Route::all().count());
        for route in Route::all() {
            let html = self.render_route(route);
            let path = output_path(output_dir, route);
            write_file(&path, &html)?;
            tracing::debug!(path = %path.display(), "Wrote page");
            pages.push(path);
        }

        let sitemap_path = output_dir.join("sitemap.xml");
        write_file(&sitemap_path, &sitemap_xml(&self.context))?;
        let robots_path = output_dir.join("robots.txt");
        write_file(&robots_path, &robots_txt(&self.context))?;

        tracing::info!(
            pages = pages.len(),
            output_dir = %output_dir.display(),
            "Static site generated"
        );

        Ok(BuildSummary {
            pages,
            sitemap_path,
            robots_path,
        })
    }
}

/// Map a route to its output file. The root path lands on `index.html`
/// directly under the output root, which overwrites the shell in place
/// when the output directory is the bundle directory.
fn output_path(output_dir: &Path, route: Route) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    for segment in route.path().split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, content).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}
