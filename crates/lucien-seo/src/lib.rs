//! Head metadata rules for the lucien site.
//!
//! One rule set describes what a correct `<head>` looks like for a route;
//! where it is applied varies. [`sync_head`] writes through the [`HeadSink`]
//! trait, implemented here by the in-memory [`HeadTagSet`] (the runtime head
//! model) and again in `lucien-sitegen` over the raw template text, so the
//! live application and the generated static pages cannot drift apart.
//!
//! # Architecture
//!
//! - [`SiteContext`]: explicit origin/brand injection with host derivation
//!   as the fallback
//! - [`HeadSink`] + [`sync_head`]: the settable-head seam and the single
//!   rule set
//! - [`HeadTagSet`]: the owned in-memory head region
//! - [`MetaSynchronizer`]: reactive wrapper the runtime drives on every
//!   route change
//! - [`structured_data`]: schema.org graph builder
//!
//! # Example
//!
//! ```
//! use lucien_routes::Route;
//! use lucien_seo::{HeadTagSet, MetaSynchronizer, SiteContext};
//!
//! let mut sync = MetaSynchronizer::new(HeadTagSet::new(), SiteContext::default());
//! sync.apply(Route::from_path("/en/signal/"));
//! assert_eq!(sync.sink().title(), "Signal / Contact | Adam Karl Lucien");
//! ```

mod context;
mod head;
mod schema;
mod sync;
mod tags;

pub use context::SiteContext;
pub use head::{AlternateLink, HeadSink, MetaKind, alternates_for, escape_attr, sync_head};
pub use schema::structured_data;
pub use sync::MetaSynchronizer;
pub use tags::HeadTagSet;
