//! Profile page operations

use awsomeshop_domain::{Result, ShopError, User, UserPatch};

use super::notify_failure;
use crate::context::AppContext;

/// Re-fetch the profile and write it through the session.
pub async fn refresh(ctx: &AppContext) -> Result<User> {
    match ctx.users.profile().await {
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

/// Change the phone number server-side, then patch the local snapshot.
pub async fn update_phone(ctx: &AppContext, phone: &str) -> Result<()> {
    if phone.trim().is_empty() {
        let err = ShopError::InvalidInput("phone number is required".into());
        notify_failure(ctx, &err);
        return Err(err);
    }

    match ctx.users.update_phone(phone).await {
        Ok(()) => {
            ctx.session.update_user(&UserPatch::phone(phone));
            ctx.notifications.success("Phone number updated");
            Ok(())
        }
        Err(err) => {
            notify_failure(ctx, &err);
            Err(err)
        }
    }
}

/// Persist a new UI language preference.
pub fn switch_language(ctx: &AppContext, language: &str) {
    ctx.store.set_language(language);
    ctx.session.update_user(&UserPatch {
        preferred_language: Some(language.to_string()),
        ..UserPatch::default()
    });
}
