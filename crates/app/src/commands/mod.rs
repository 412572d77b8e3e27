//! Page-level operations
//!
//! One thin async function per operation a page performs. Commands are
//! the final error handler: a failure surfaces as an error notification
//! and is returned to the caller, which leaves its view in the pre-call
//! state. Nothing is retried here.

pub mod admin;
pub mod auth;
pub mod locale;
pub mod points;
pub mod profile;
pub mod shop;

use awsomeshop_domain::ShopError;

use crate::context::AppContext;

/// Route a failure into the shared notification queue.
pub(crate) fn notify_failure(ctx: &AppContext, err: &ShopError) {
    ctx.notifications.error(err.to_string());
}
