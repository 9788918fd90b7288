//! # Session mirror — local cache of the logged-in identity
//!
//! [`SessionMirror`] keeps a JSON-encoded [`SessionUser`] under a single
//! well-known key ([`SESSION_KEY`]) in whatever [`StorageBackend`] the
//! platform provides:
//!
//! | Backend | Platform | Persistence |
//! |---------|----------|-------------|
//! | [`crate::MemoryBackend`] | native, tests | process lifetime only |
//! | [`crate::LocalStorageBackend`] | web (`web` feature) | survives reloads via `localStorage` |
//!
//! Semantics are deliberately dumb: last write wins, no validation, no
//! expiry. The mirror is overwritten on every backend-confirmed login and
//! cleared on every logout, so it never diverges from the backend's notion
//! of the session for longer than one notification cycle. A stored record
//! that fails to parse reads as "no session".

use crate::models::SessionUser;

/// Storage key for the session record. The only key this crate ever writes.
pub const SESSION_KEY: &str = "miniblog.session";

/// Durable local key-value storage behind the session mirror.
///
/// All operations are synchronous and infallible from the caller's point of
/// view; backends swallow their own errors.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Minimal local copy of the authenticated identity.
#[derive(Clone, Debug)]
pub struct SessionMirror<S> {
    backend: S,
}

impl<S: StorageBackend> SessionMirror<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The cached identity, or `None` when logged out.
    ///
    /// Synchronous so the UI can gate actions without waiting on the
    /// backend. An unreadable record is treated as no session.
    pub fn get_user(&self) -> Option<SessionUser> {
        let raw = self.backend.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::error!("discarding unreadable session record: {err}");
                None
            }
        }
    }

    /// Overwrite the cache with the given identity.
    pub fn set_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.backend.set(SESSION_KEY, &raw),
            Err(err) => tracing::error!("failed to encode session record: {err}"),
        }
    }

    /// Remove the cache entirely.
    pub fn clear(&self) {
        self.backend.remove(SESSION_KEY);
    }
}
