//! # `localStorage` backend — browser-side persistence
//!
//! [`LocalStorageBackend`] is the [`StorageBackend`] used on the web
//! platform. The session record survives page reloads because it lives in
//! the browser's `localStorage`.
//!
//! All methods swallow errors (reads degrade to `None`, writes are logged
//! and dropped). An unavailable or full `localStorage` means the UI starts
//! logged out and re-syncs from the backend's next auth notification, which
//! is the correct fallback for a non-authoritative cache.

use crate::session::StorageBackend;

/// `localStorage`-backed storage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::error!("failed to persist {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
