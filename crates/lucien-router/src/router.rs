use lucien_routes::{Language, Route, Section};

use crate::History;

/// Sole owner of the visitor's route during a session.
///
/// Holds the decoded [`Route`] next to the history handle so the two only
/// change through the same choke points: [`navigate_to`] for explicit
/// navigation, [`sync_from_history`] when the browser traverses the stack
/// underneath us.
///
/// [`navigate_to`]: Router::navigate_to
/// [`sync_from_history`]: Router::sync_from_history
#[derive(Debug)]
pub struct Router<H> {
    history: H,
    route: Route,
}

impl<H: History> Router<H> {
    /// Decode the current address-bar path and take ownership of it.
    ///
    /// When the canonical re-encoding differs from the literal path (alias
    /// spelling, missing trailing slash, unknown segment), the current
    /// entry is replaced in place. A silent normalization, not a visible
    /// navigation.
    pub fn initialize(history: H) -> Self {
        let literal = history.path();
        let route = Route::from_path(&literal);
        let canonical = route.path();
        if literal != canonical {
            tracing::debug!(from = %literal, to = %canonical, "Normalizing address path");
            history.replace(&canonical);
        }
        Self { history, route }
    }

    /// Current route state.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Navigate to a section in a language.
    ///
    /// Writes history only when the target path differs from the current
    /// one; re-selecting the current section must not grow the back stack.
    /// State updates unconditionally either way. With `replace` set the
    /// write overwrites the current entry instead of pushing.
    pub fn navigate_to(&mut self, section: Section, language: Language, replace: bool) -> Route {
        let target = Route::new(section, language);
        let path = target.path();
        if self.history.path() == path {
            tracing::debug!(path = %path, "Navigation target already current");
        } else {
            tracing::debug!(path = %path, replace, "Navigating");
            if replace {
                self.history.replace(&path);
            } else {
                self.history.push(&path);
            }
        }
        self.route = target;
        target
    }

    /// Adopt whatever path the history now reports.
    ///
    /// Back/forward traversal is the one case where the address changes
    /// without a [`navigate_to`](Self::navigate_to) call; the embedder
    /// forwards that event here and we re-decode.
    pub fn sync_from_history(&mut self) -> Route {
        let route = Route::from_path(&self.history.path());
        tracing::debug!(path = %route.path(), "Adopting history position");
        self.route = route;
        route
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }
}
