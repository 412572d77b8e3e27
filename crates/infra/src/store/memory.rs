//! In-memory session store
//!
//! Backs tests and embedders that do not want anything touching disk.

use awsomeshop_core::SessionStore;
use awsomeshop_domain::User;
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Inner {
    token: Option<String>,
    user: Option<User>,
    language: Option<String>,
}

/// Session store that never persists.
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Inner>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_token(&self, token: &str) {
        self.inner.lock().token = Some(token.to_string());
    }

    fn token(&self) -> Option<String> {
        self.inner.lock().token.clone()
    }

    fn set_user(&self, user: &User) {
        self.inner.lock().user = Some(user.clone());
    }

    fn user(&self) -> Option<User> {
        self.inner.lock().user.clone()
    }

    fn set_session(&self, token: &str, user: &User) {
        let mut inner = self.inner.lock();
        inner.token = Some(token.to_string());
        inner.user = Some(user.clone());
    }

    fn set_language(&self, language: &str) {
        self.inner.lock().language = Some(language.to_string());
    }

    fn language(&self) -> Option<String> {
        self.inner.lock().language.clone()
    }

    fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.token = None;
        inner.user = None;
    }
}
