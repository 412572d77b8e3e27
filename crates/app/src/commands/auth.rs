//! Login and logout

use awsomeshop_core::{Navigator, Route};
use awsomeshop_domain::{Result, ShopError, User};
use tracing::{info, warn};

use super::notify_failure;
use crate::context::AppContext;

/// Sign in and land on the role's home page.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<User> {
    if email.trim().is_empty() || password.is_empty() {
        let err = ShopError::InvalidInput("email and password are required".into());
        notify_failure(ctx, &err);
        return Err(err);
    }

    match ctx.auth.login(email, password).await {
        Ok(response) => {
            // The endpoint has persisted the session; mirror it in memory.
            ctx.session.login(response.token, response.user.clone());
            ctx.navigation.navigate(Route::home(response.user.role).path());
            info!(user_id = response.user.id, "user signed in");
            ctx.notifications.success("Signed in");
            Ok(response.user)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Sign out. The backend call is best-effort; the local session is gone
/// when this returns, whatever the server said.
pub async fn logout(ctx: &AppContext) {
    if let Err(err) = ctx.auth.logout().await {
        warn!(error = %err, "logout request failed");
    }
    ctx.session.logout();
    ctx.navigation.force_navigate(Route::Login);
}

/// Re-fetch the caller's account from `/auth/me`.
pub async fn current_user(ctx: &AppContext) -> Result<User> {
    match ctx.auth.me().await {
        Ok(user) => {
            ctx.session.replace_user(user.clone());
            Ok(user)
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}
