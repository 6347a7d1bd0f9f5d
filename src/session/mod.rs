//! Client-side session context.
//!
//! Holds the bearer token and the last-known current-user snapshot. The
//! session is an explicit, injectable object so the guard and the API layer
//! can be exercised against fixture sessions in tests; nothing in this
//! module is a process-global.
//!
//! Token persistence is abstracted behind [`TokenStore`]: the real console
//! uses [`FileTokenStore`], tests use [`MemoryTokenStore`].

use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use tokio::sync::OnceCell;

use crate::models::User;

/// Persisted-token storage. The surface is infallible on purpose — like the
/// browser storage it replaces, a failed write degrades to "not remembered"
/// rather than an error the session layer would have to invent handling for.
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist the token.
    fn save(&self, token: &str);
    /// Forget the persisted token.
    fn clear(&self);
}

/// Token persisted as a plain file under the configured path.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create token directory {:?}: {}", parent, e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!("Failed to persist session token to {:?}: {}", self.path, e);
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Failed to clear session token at {:?}: {}", self.path, e);
            }
        }
    }
}

/// In-memory token store for fixture sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixture store pre-seeded with a token, as if a previous login had
    /// persisted one.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
}

/// One consistent read of the session, taken once per navigation attempt so
/// the guard's sequential checks all see the same state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// Role of the current user, if one is known.
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}

/// The session context: current token and user snapshot with a defined
/// lifecycle (`establish`, `set_user`, `clear`).
///
/// The token field is read by the request wrapper on every outgoing call and
/// by the navigation guard; it is mutated only by the login/logout flows and
/// hydration. The hydration latch lives here so `Console::initialize` is
/// idempotent: concurrent callers coalesce onto one fetch.
pub struct Session {
    store: Box<dyn TokenStore>,
    state: RwLock<SessionState>,
    hydrated: OnceCell<()>,
}

impl Session {
    /// Create a session, picking up any token the store persisted earlier.
    pub fn new(store: Box<dyn TokenStore>) -> Self {
        let token = store.load();
        Self {
            store,
            state: RwLock::new(SessionState { token, user: None }),
            hydrated: OnceCell::new(),
        }
    }

    /// Current bearer token, if present.
    pub fn token(&self) -> Option<String> {
        self.state.read().unwrap().token.clone()
    }

    /// Last-known current-user snapshot, possibly absent.
    pub fn user(&self) -> Option<User> {
        self.state.read().unwrap().user.clone()
    }

    /// One consistent snapshot of token + user.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().unwrap();
        SessionSnapshot {
            token: state.token.clone(),
            user: state.user.clone(),
        }
    }

    /// Login succeeded: persist the token and remember the user.
    pub fn establish(&self, token: &str, user: User) {
        self.store.save(token);
        let mut state = self.state.write().unwrap();
        state.token = Some(token.to_string());
        state.user = Some(user);
    }

    /// Replace the current-user snapshot (hydration, profile refresh).
    pub fn set_user(&self, user: User) {
        self.state.write().unwrap().user = Some(user);
    }

    /// Logout: wipe the in-memory state and the persisted token.
    pub fn clear(&self) {
        self.store.clear();
        let mut state = self.state.write().unwrap();
        state.token = None;
        state.user = None;
    }

    /// Hydration latch used by `Console::initialize`.
    pub(crate) fn hydration(&self) -> &OnceCell<()> {
        &self.hydrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: &str) -> User {
        serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "username": "alice",
            "name": "Alice",
            "first_name": "Alice",
            "last_name": "",
            "email": "alice@example.com",
            "role": role,
            "is_active": true,
            "date_joined": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_session_picks_up_persisted_token() {
        let session = Session::new(Box::new(MemoryTokenStore::with_token("tok-1")));
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_establish_and_clear() {
        let session = Session::new(Box::new(MemoryTokenStore::new()));
        assert!(session.token().is_none());

        session.establish("tok-2", sample_user("admin"));
        assert_eq!(session.token().as_deref(), Some("tok-2"));
        assert_eq!(session.snapshot().role(), Some("admin"));

        session.clear();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_token_survives_across_sessions_until_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.token");

        let session = Session::new(Box::new(FileTokenStore::new(&path)));
        session.establish("tok-3", sample_user("user"));
        drop(session);

        // A fresh session over the same store picks the token back up.
        let session = Session::new(Box::new(FileTokenStore::new(&path)));
        assert_eq!(session.token().as_deref(), Some("tok-3"));

        session.clear();
        let session = Session::new(Box::new(FileTokenStore::new(&path)));
        assert!(session.token().is_none());
    }

    #[test]
    fn test_file_token_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.token");

        let store = FileTokenStore::new(&path);
        assert!(store.load().is_none());

        store.save("file-token");
        assert_eq!(store.load().as_deref(), Some("file-token"));

        store.clear();
        assert!(store.load().is_none());
        // Clearing twice is fine.
        store.clear();
    }

    #[test]
    fn test_file_token_store_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.token");
        std::fs::write(&path, "  tok-ws\n").unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.load().as_deref(), Some("tok-ws"));
    }
}
