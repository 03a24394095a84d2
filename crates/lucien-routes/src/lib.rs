//! Canonical route model for the bilingual lucien site.
//!
//! A [`Route`] pairs one content [`Section`] with one [`Language`] and maps
//! bijectively onto a canonical URL path. Decoding is total: malformed or
//! unknown paths degrade to the default route instead of failing, so every
//! address a visitor can type resolves to something renderable.
//!
//! # Architecture
//!
//! - [`Section`]: the closed set of content sections and their path segments
//! - [`Language`]: the two served languages, their URL prefixes and locales
//! - [`Route`]: the `(section, language)` pair with `path` / `from_path`
//!
//! # Example
//!
//! ```
//! use lucien_routes::{Language, Route, Section};
//!
//! let route = Route::new(Section::Signal, Language::En);
//! assert_eq!(route.path(), "/en/signal/");
//! assert_eq!(Route::from_path("/en/signal"), route);
//! ```

mod language;
mod route;
mod section;

pub use language::Language;
pub use route::Route;
pub use section::Section;
