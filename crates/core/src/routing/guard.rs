//! Route guard
//!
//! A pure function from (authentication state, requested path) to a
//! navigation decision. Re-evaluated on every navigation; nothing here is
//! cached or asynchronous.

use awsomeshop_domain::Role;

use super::route::Route;

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route.
    Allow(Route),
    /// Navigate somewhere else instead.
    Redirect(Route),
}

impl RouteDecision {
    /// The route that ends up rendered either way.
    pub fn target(&self) -> Route {
        match self {
            Self::Allow(route) | Self::Redirect(route) => *route,
        }
    }
}

/// Decide what a navigation to `path` resolves to.
///
/// `role` is `None` for an anonymous visitor. Unknown paths redirect to
/// the login page even when authenticated; the fail-closed default is
/// deliberate.
pub fn resolve(role: Option<Role>, path: &str) -> RouteDecision {
    // The bare root is an alias for the employee catalog.
    if path.trim_end_matches('/').is_empty() {
        return match role {
            Some(_) => RouteDecision::Redirect(Route::Products),
            None => RouteDecision::Redirect(Route::Login),
        };
    }

    let Some(route) = Route::parse(path) else {
        return RouteDecision::Redirect(Route::Login);
    };

    match role {
        None => {
            if route == Route::Login {
                RouteDecision::Allow(Route::Login)
            } else {
                RouteDecision::Redirect(Route::Login)
            }
        }
        Some(role) => {
            if route == Route::Login {
                // Already signed in; bounce to the role's landing page.
                RouteDecision::Redirect(Route::home(role))
            } else if route.requires_admin() && role != Role::Admin {
                // Silent downgrade, not an error.
                RouteDecision::Redirect(Route::Products)
            } else {
                RouteDecision::Allow(route)
            }
        }
    }
}
