//! Navigation state
//!
//! Owns the current route. Ordinary navigation runs every request through
//! the pure route guard against the live session; the transport layer
//! uses the [`Navigator`] port to force the login page when a 401 tears
//! the session down.

use std::sync::Arc;

use awsomeshop_core::{resolve, Navigator, Route, RouteDecision, SessionManager};
use parking_lot::RwLock;
use tracing::debug;

/// Current location plus guard-driven transitions.
pub struct NavigationState {
    session: Arc<SessionManager>,
    current: RwLock<Route>,
}

impl NavigationState {
    /// Start at whatever the guard resolves the root path to: the catalog
    /// for a hydrated session, the login page otherwise.
    pub fn new(session: Arc<SessionManager>) -> Self {
        let initial = resolve(session.role(), "/").target();
        Self { session, current: RwLock::new(initial) }
    }

    /// Attempt a navigation. The decision is derived from the live
    /// session on every call; the resulting route (allowed or redirect
    /// target) becomes current.
    pub fn navigate(&self, path: &str) -> RouteDecision {
        let decision = resolve(self.session.role(), path);
        let target = decision.target();
        debug!(path, target = target.path(), "navigation resolved");
        *self.current.write() = target;
        decision
    }

    pub fn current(&self) -> Route {
        *self.current.read()
    }
}

impl Navigator for NavigationState {
    fn force_navigate(&self, route: Route) {
        // The store may have been cleared underneath us; pick that up the
        // way a full page reload would.
        self.session.resync();
        *self.current.write() = route;
    }
}
