//! File-backed session store
//!
//! Persists the session as one JSON document: auth token, serialized user
//! snapshot, and the language preference. Every operation is best-effort;
//! a storage failure is logged and the in-memory cache carries the state
//! for the remainder of the process.

use std::path::{Path, PathBuf};

use awsomeshop_core::SessionStore;
use awsomeshop_domain::User;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// On-disk document layout.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    auth_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

/// Session store backed by a JSON file.
pub struct FileSessionStore {
    path: PathBuf,
    cache: Mutex<SessionDocument>,
}

impl FileSessionStore {
    /// Open a store at `path`, loading whatever is already there.
    ///
    /// A missing file starts empty; an unreadable or malformed file is
    /// logged and treated as empty rather than failing construction.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = Mutex::new(Self::load(&path));
        Self { path, cache }
    }

    fn load(path: &Path) -> SessionDocument {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                warn!(path = %path.display(), error = %err, "malformed session document, starting empty");
                SessionDocument::default()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => SessionDocument::default(),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to read session document");
                SessionDocument::default()
            }
        }
    }

    /// Write the cached document out. Failures are logged, never raised.
    fn persist(&self, document: &SessionDocument) {
        let serialized = match serde_json::to_string_pretty(document) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "failed to serialize session document");
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    warn!(path = %parent.display(), error = %err, "failed to create session directory");
                    return;
                }
            }
        }

        if let Err(err) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), error = %err, "failed to write session document");
        }
    }

    fn mutate(&self, apply: impl FnOnce(&mut SessionDocument)) {
        let mut cache = self.cache.lock();
        apply(&mut cache);
        self.persist(&cache);
    }
}

impl SessionStore for FileSessionStore {
    fn set_token(&self, token: &str) {
        self.mutate(|doc| doc.auth_token = Some(token.to_string()));
    }

    fn token(&self) -> Option<String> {
        self.cache.lock().auth_token.clone()
    }

    fn set_user(&self, user: &User) {
        self.mutate(|doc| doc.user = Some(user.clone()));
    }

    fn user(&self) -> Option<User> {
        self.cache.lock().user.clone()
    }

    fn set_session(&self, token: &str, user: &User) {
        self.mutate(|doc| {
            doc.auth_token = Some(token.to_string());
            doc.user = Some(user.clone());
        });
    }

    fn set_language(&self, language: &str) {
        self.mutate(|doc| doc.language = Some(language.to_string()));
    }

    fn language(&self) -> Option<String> {
        self.cache.lock().language.clone()
    }

    fn clear(&self) {
        self.mutate(|doc| {
            doc.auth_token = None;
            doc.user = None;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee() -> User {
        serde_json::from_value(serde_json::json!({
            "id": 7,
            "full_name": "Li Wei",
            "email": "li.wei@example.com",
            "phone": "13800000000",
            "role": "employee",
            "points_balance": 120,
            "is_first_login": false,
            "is_active": true,
            "preferred_language": "zh",
            "created_at": "2025-01-05T08:00:00Z",
            "updated_at": "2025-06-01T08:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.set_session("tok-1", &employee());
        store.set_language("en");
        drop(store);

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.token(), Some("tok-1".to_string()));
        assert_eq!(reopened.user().unwrap().id, 7);
        assert_eq!(reopened.language(), Some("en".to_string()));
    }

    #[test]
    fn clear_removes_session_but_keeps_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.set_session("tok-1", &employee());
        store.set_language("en");
        store.clear();

        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert_eq!(store.language(), Some("en".to_string()));

        let reopened = FileSessionStore::open(&path);
        assert!(reopened.token().is_none());
        assert_eq!(reopened.language(), Some("en".to_string()));
    }

    #[test]
    fn malformed_document_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn unwritable_path_degrades_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // Parent "directory" is a regular file, so writes must fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let path = blocker.join("session.json");

        let store = FileSessionStore::open(&path);
        store.set_token("tok-1");
        assert_eq!(store.token(), Some("tok-1".to_string()));
    }

    #[test]
    fn missing_parent_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("session.json");

        let store = FileSessionStore::open(&path);
        store.set_token("tok-1");
        assert!(path.exists());
    }
}
