//! Static page generation for the lucien site.
//!
//! Renders one self-contained HTML page per route from the client bundle's
//! shell, plus `sitemap.xml` and `robots.txt`:
//! - The head rewrite applies the same rule set as the runtime
//!   synchronizer, implemented over the raw template text
//! - A delimited fallback block gives no-script clients a readable body
//! - Output layout mirrors the URL scheme, one `index.html` per route
//!
//! # Architecture
//!
//! The crate is organized into modules:
//! - [`html`]: `HeadSink` over a text buffer via idempotent search-and-replace
//! - [`fallback`]: the delimited no-script body block
//! - [`builder`]: per-route rendering and output file layout
//! - [`sitemap`]: `sitemap.xml` and `robots.txt` emission
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//!
//! use lucien_seo::SiteContext;
//! use lucien_sitegen::StaticSiteBuilder;
//!
//! let builder = StaticSiteBuilder::from_template_file(
//!     SiteContext::default(),
//!     Path::new("dist/index.html"),
//! )?;
//! let summary = builder.build(Path::new("dist"))?;
//! println!("{} pages", summary.pages.len());
//! ```

mod builder;
mod fallback;
mod html;
mod sitemap;

pub use builder::{BuildError, BuildSummary, StaticSiteBuilder};
pub use fallback::{FALLBACK_END, FALLBACK_START, fallback_block};
pub use html::HtmlDocument;
pub use sitemap::{robots_txt, sitemap_xml};
