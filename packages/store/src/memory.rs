use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::StorageBackend;

/// In-memory StorageBackend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SessionUser;
    use crate::session::{SessionMirror, SESSION_KEY};

    fn sam() -> SessionUser {
        SessionUser {
            uid: "uid-1".to_string(),
            email: "sam@example.com".to_string(),
        }
    }

    #[test]
    fn test_session_round_trip() {
        let mirror = SessionMirror::new(MemoryBackend::new());

        assert!(mirror.get_user().is_none());

        mirror.set_user(&sam());
        let user = mirror.get_user().unwrap();
        assert_eq!(user.uid, "uid-1");
        assert_eq!(user.email, "sam@example.com");
    }

    #[test]
    fn test_clear_removes_session() {
        let mirror = SessionMirror::new(MemoryBackend::new());

        mirror.set_user(&sam());
        mirror.clear();
        assert!(mirror.get_user().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let mirror = SessionMirror::new(MemoryBackend::new());

        mirror.set_user(&sam());
        mirror.set_user(&SessionUser {
            uid: "uid-2".to_string(),
            email: "kim@example.com".to_string(),
        });

        assert_eq!(mirror.get_user().unwrap().uid, "uid-2");
    }

    #[test]
    fn test_corrupted_record_reads_as_no_session() {
        let backend = MemoryBackend::new();
        backend.set(SESSION_KEY, "{not json");

        let mirror = SessionMirror::new(backend);
        assert!(mirror.get_user().is_none());
    }
}
