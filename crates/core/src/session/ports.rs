//! Port interfaces for session persistence
//!
//! These traits define the boundary between the session logic and the
//! storage medium that backs it.

use awsomeshop_domain::User;

/// Trait for the persistent session store.
///
/// All operations are synchronous and best-effort: implementations catch
/// storage-medium failures at their own boundary, log them, and degrade to
/// in-memory behavior for that call. Nothing here returns an error.
pub trait SessionStore: Send + Sync {
    /// Persist the auth token.
    fn set_token(&self, token: &str);

    /// Currently stored auth token, if any.
    fn token(&self) -> Option<String>;

    /// Persist the user snapshot.
    fn set_user(&self, user: &User);

    /// Currently stored user snapshot, if any.
    fn user(&self) -> Option<User>;

    /// Persist token and user as one combined operation.
    ///
    /// Implementations must apply both or neither; a session is never left
    /// with only one of the two present.
    fn set_session(&self, token: &str, user: &User);

    /// Persist the UI language preference.
    fn set_language(&self, language: &str);

    /// Currently stored language preference, if any.
    fn language(&self) -> Option<String>;

    /// Remove token and user in one operation. The language preference
    /// survives a session teardown.
    fn clear(&self);
}
