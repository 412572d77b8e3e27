//! Session manager - tab-lifetime authentication state

use std::sync::Arc;

use awsomeshop_domain::{Role, User, UserPatch};
use parking_lot::RwLock;
use tracing::{debug, warn};

use super::ports::SessionStore;

#[derive(Debug, Default, Clone)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// In-memory authentication state, hydrated once from the persistent
/// store at construction and written through on every mutation.
///
/// The two mutators (`login`, `logout`) each apply their state change
/// under a single write lock, so no reader can observe a half-applied
/// session.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    /// Create a manager hydrated from the store. No backend call is made.
    ///
    /// A half-present session (token without user snapshot, or the
    /// reverse) violates the session invariant and is discarded from both
    /// memory and store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let token = store.token();
        let user = store.user();

        let state = match (token, user) {
            (Some(token), Some(user)) => {
                debug!(user_id = user.id, "session hydrated from store");
                SessionState { token: Some(token), user: Some(user) }
            }
            (None, None) => SessionState::default(),
            _ => {
                warn!("half-present session in store, discarding");
                store.clear();
                SessionState::default()
            }
        };

        Self { store, state: RwLock::new(state) }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Current user snapshot, if authenticated.
    pub fn user(&self) -> Option<User> {
        self.state.read().user.clone()
    }

    /// Role of the current user, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.state.read().user.as_ref().map(|u| u.role)
    }

    /// Install a fresh session: store first (combined write), then memory.
    pub fn login(&self, token: impl Into<String>, user: User) {
        let token = token.into();
        self.store.set_session(&token, &user);
        let mut state = self.state.write();
        debug!(user_id = user.id, "session installed");
        *state = SessionState { token: Some(token), user: Some(user) };
    }

    /// Tear the session down in store and memory.
    ///
    /// Idempotent: calling this while already anonymous is a no-op.
    pub fn logout(&self) {
        self.store.clear();
        let mut state = self.state.write();
        if state.token.is_some() {
            debug!("session cleared");
        }
        *state = SessionState::default();
    }

    /// Merge a partial update into the in-memory user snapshot.
    ///
    /// Local-only: the caller is responsible for having already persisted
    /// the change server-side. Returns the merged snapshot, or `None` when
    /// anonymous.
    pub fn update_user(&self, patch: &UserPatch) -> Option<User> {
        let mut state = self.state.write();
        let merged = state.user.take().map(|user| patch.apply(user));
        state.user = merged.clone();
        merged
    }

    /// Replace the user snapshot wholesale, writing it through to the
    /// store. Used after a server-confirmed profile refresh.
    pub fn replace_user(&self, user: User) {
        self.store.set_user(&user);
        self.state.write().user = Some(user);
    }

    /// Re-derive memory state from the store.
    ///
    /// The transport layer clears the store directly on a 401; this picks
    /// that teardown up, the way a full page reload re-hydrates the SPA.
    pub fn resync(&self) {
        let token = self.store.token();
        let user = self.store.user();
        let mut state = self.state.write();
        match (token, user) {
            (Some(token), Some(user)) => *state = SessionState { token: Some(token), user: Some(user) },
            _ => *state = SessionState::default(),
        }
    }
}
