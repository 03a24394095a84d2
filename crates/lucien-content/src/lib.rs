//! Frozen presentation copy and site identity.
//!
//! Everything user-visible that is not layout lives here: per-route SEO
//! titles and descriptions, navigation labels, the fallback summary
//! paragraphs, and the person/service facts behind the structured data.
//! Lookups are exhaustive matches over the closed route enumeration, so a
//! route without copy cannot compile.
//!
//! The strings are marketing copy mirrored from the live site. Edits belong
//! to content review, not engineering.

mod copy;
mod seo;

pub use copy::{Service, job_title, language_name, nav_label, services, summary};
pub use seo::{SeoEntry, entry};

/// Site brand, also the structured-data Person name.
pub const BRAND: &str = "Adam Karl Lucien";

/// Production origin. Configuration may override it for previews.
pub const DEFAULT_ORIGIN: &str = "https://adamkarl.lucien.technology";

/// Contact points published in the Person node.
pub const EMAIL: &str = "adam.karl.lucien@luciensystems.io";
pub const TELEPHONE: &str = "+420 728 041 700";

/// Shell background color, mirrored into the theme-color meta tag.
pub const THEME_COLOR: &str = "#030303";

/// Name the application-name meta tag reports.
pub const APPLICATION_NAME: &str = "Lucien OS";

pub const ROBOTS_DIRECTIVE: &str = "index, follow";

/// Social preview image, origin-relative, with its pixel dimensions.
pub const OG_IMAGE_PATH: &str = "/og-image.jpg";
pub const OG_IMAGE_WIDTH: &str = "1200";
pub const OG_IMAGE_HEIGHT: &str = "630";
pub const TWITTER_CARD: &str = "summary_large_image";
