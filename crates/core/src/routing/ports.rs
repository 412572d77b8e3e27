//! Port interfaces for navigation

use super::route::Route;

/// Trait for the component that owns the current location.
///
/// Implemented by the application shell; used by the transport layer to
/// force the login page when a response tears the session down.
pub trait Navigator: Send + Sync {
    /// Navigate unconditionally, bypassing the route guard.
    fn force_navigate(&self, route: Route);
}
