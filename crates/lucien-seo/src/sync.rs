use lucien_routes::Route;

use crate::{HeadSink, SiteContext, sync_head};

/// Owns a head sink and keeps it consistent with the current route.
///
/// The runtime wiring: construct once at startup, call [`apply`] after
/// every route change, whether it came from an explicit navigation or from
/// history traversal. Redundant calls are harmless since the rule set is
/// idempotent.
///
/// [`apply`]: MetaSynchronizer::apply
#[derive(Debug)]
pub struct MetaSynchronizer<S> {
    sink: S,
    context: SiteContext,
    current: Option<Route>,
}

impl<S: HeadSink> MetaSynchronizer<S> {
    #[must_use]
    pub fn new(sink: S, context: SiteContext) -> Self {
        Self {
            sink,
            context,
            current: None,
        }
    }

    /// Rewrite the head for `route`.
    pub fn apply(&mut self, route: Route) {
        tracing::debug!(path = %route.path(), "Synchronizing document head");
        sync_head(&mut self.sink, route, &self.context);
        self.current = Some(route);
    }

    /// Route of the most recent [`apply`](Self::apply), if any.
    #[must_use]
    pub fn current(&self) -> Option<Route> {
        self.current
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn context(&self) -> &SiteContext {
        &self.context
    }

    /// Consume the synchronizer and hand the sink back.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}
