//! Session navigation state for the lucien site.
//!
//! [`Router`] is the sole owner of the visitor's route during a session and
//! the only writer to the history stack. It decodes whatever path the
//! session starts on, silently normalizes it to canonical form, and from
//! then on keeps state and address bar in lockstep: explicit navigation
//! flows through [`Router::navigate_to`], back/forward traversal through
//! [`Router::sync_from_history`].
//!
//! The history itself sits behind the [`History`] trait. The browser
//! adapter lives with the embedding shell; [`MemoryHistory`] (behind the
//! `mock` feature) covers tests and headless use.
//!
//! # Example
//!
//! ```ignore
//! use lucien_router::{MemoryHistory, Router};
//! use lucien_routes::{Language, Section};
//!
//! let mut router = Router::initialize(MemoryHistory::at("/en/signal"));
//! assert_eq!(router.route().section, Section::Signal);
//!
//! router.navigate_to(Section::Modules, Language::En, false);
//! assert_eq!(router.history().path(), "/en/modules/");
//! ```

mod history;
#[cfg(any(test, feature = "mock"))]
mod memory;
mod redirect;
mod router;

pub use history::History;
#[cfg(any(test, feature = "mock"))]
pub use memory::{HistoryOp, MemoryHistory};
pub use redirect::origin_redirect;
pub use router::Router;
