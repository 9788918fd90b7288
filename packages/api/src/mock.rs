//! # Scripted backend for tests
//!
//! [`MockBackend`] implements [`Backend`] entirely in memory: it records
//! every call, serves documents from per-collection vectors, resolves the
//! server-timestamp sentinel with the local clock (standing in for the
//! backend's), and lets a test script the next sign-in to fail. Used the way
//! the store crate's `MemoryBackend` is: inject it, run the flow, assert on
//! what was called and what was stored.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::auth::AuthEvents;
use crate::backend::{Backend, Document, OrderBy};
use crate::error::ApiError;
use crate::models::{Identity, Timestamp};

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SignUp { email: String },
    SignIn { email: String },
    SignOut,
    Add { collection: String },
    Update { collection: String, id: String },
    Delete { collection: String, id: String },
    List { collection: String },
}

#[derive(Default)]
struct State {
    next_doc: u64,
    next_uid: u64,
    /// email → uid for identities known to the fake identity provider.
    identities: HashMap<String, String>,
    collections: HashMap<String, Vec<Document>>,
    calls: Vec<Call>,
    sign_in_error: Option<String>,
}

/// In-memory [`Backend`] with call recording.
#[derive(Clone, Default)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
    events: AuthEvents,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every backend call made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Current contents of a collection.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Place a document directly into a collection, bypassing call recording.
    pub fn seed_document(&self, collection: &str, id: &str, fields: Value) {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.to_string(),
                fields,
            });
    }

    /// Teach the fake identity provider an email → uid mapping.
    pub fn insert_identity(&self, email: &str, uid: &str) {
        self.state
            .lock()
            .unwrap()
            .identities
            .insert(email.to_string(), uid.to_string());
    }

    /// Make the next sign-in fail with the given message.
    pub fn fail_sign_in(&self, message: &str) {
        self.state.lock().unwrap().sign_in_error = Some(message.to_string());
    }

    /// Replace server-timestamp sentinels with the clock, like the real
    /// backend does at write time.
    fn resolve_server_timestamps(fields: &mut Value) {
        let Value::Object(map) = fields else {
            return;
        };
        let now = chrono::Utc::now().timestamp_millis();
        for value in map.values_mut() {
            if value.get("__server_timestamp__").is_some() {
                *value = Value::from(now);
            }
        }
    }
}

impl Backend for MockBackend {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Identity, ApiError> {
        let uid = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::SignUp {
                email: email.to_string(),
            });
            state.next_uid += 1;
            let uid = format!("uid-{}", state.next_uid);
            state.identities.insert(email.to_string(), uid.clone());
            uid
        };

        let identity = Identity {
            uid,
            email: email.to_string(),
        };
        self.events.notify(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity, ApiError> {
        let uid = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::SignIn {
                email: email.to_string(),
            });
            if let Some(message) = state.sign_in_error.take() {
                return Err(ApiError::Backend(message));
            }
            match state.identities.get(email).cloned() {
                Some(uid) => uid,
                None => {
                    state.next_uid += 1;
                    let uid = format!("uid-{}", state.next_uid);
                    state.identities.insert(email.to_string(), uid.clone());
                    uid
                }
            }
        };

        let identity = Identity {
            uid,
            email: email.to_string(),
        };
        self.events.notify(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        self.state.lock().unwrap().calls.push(Call::SignOut);
        self.events.notify(None);
        Ok(())
    }

    async fn add_document(&self, collection: &str, mut fields: Value) -> Result<String, ApiError> {
        Self::resolve_server_timestamps(&mut fields);

        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Add {
            collection: collection.to_string(),
        });
        state.next_doc += 1;
        let id = format!("doc-{}", state.next_doc);
        state
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(Document {
                id: id.clone(),
                fields,
            });
        Ok(id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        mut fields: Value,
    ) -> Result<(), ApiError> {
        Self::resolve_server_timestamps(&mut fields);

        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update {
            collection: collection.to_string(),
            id: id.to_string(),
        });

        let doc = state
            .collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| ApiError::Backend(format!("no document {collection}/{id}")))?;

        if let (Value::Object(existing), Value::Object(updates)) = (&mut doc.fields, fields) {
            for (key, value) in updates {
                existing.insert(key, value);
            }
        }
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete {
            collection: collection.to_string(),
            id: id.to_string(),
        });
        if let Some(docs) = state.collections.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }

    async fn list_documents(
        &self,
        collection: &str,
        order: Option<OrderBy>,
    ) -> Result<Vec<Document>, ApiError> {
        let mut docs = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(Call::List {
                collection: collection.to_string(),
            });
            state
                .collections
                .get(collection)
                .cloned()
                .unwrap_or_default()
        };

        if let Some(order) = order {
            docs.sort_by_key(|doc| {
                doc.fields
                    .get(order.field)
                    .and_then(|value| serde_json::from_value::<Timestamp>(value.clone()).ok())
                    .and_then(|ts| ts.to_datetime())
            });
            if order.descending {
                docs.reverse();
            }
        }
        Ok(docs)
    }

    fn auth_events(&self) -> &AuthEvents {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{NEWEST_FIRST, POSTS};
    use serde_json::json;

    #[tokio::test]
    async fn test_listing_orders_newest_first() {
        let backend = MockBackend::new();
        backend.seed_document(POSTS, "old", json!({"createdAt": 1_000i64}));
        backend.seed_document(POSTS, "new", json!({"createdAt": 2_000i64}));

        let docs = backend.list_documents(POSTS, Some(NEWEST_FIRST)).await.unwrap();
        assert_eq!(docs[0].id, "new");
        assert_eq!(docs[1].id, "old");
    }

    #[tokio::test]
    async fn test_add_resolves_server_timestamps() {
        let backend = MockBackend::new();
        backend
            .add_document(POSTS, json!({"title": "t", "createdAt": Timestamp::server_set()}))
            .await
            .unwrap();

        let docs = backend.documents(POSTS);
        assert!(docs[0].fields["createdAt"].is_i64());
    }

    #[tokio::test]
    async fn test_update_merges_into_existing_fields() {
        let backend = MockBackend::new();
        backend.seed_document(POSTS, "p1", json!({"title": "old", "author": "a@x.com"}));

        backend
            .update_document(POSTS, "p1", json!({"title": "new"}))
            .await
            .unwrap();

        let doc = &backend.documents(POSTS)[0];
        assert_eq!(doc.fields["title"], "new");
        assert_eq!(doc.fields["author"], "a@x.com");
    }

    #[tokio::test]
    async fn test_update_of_missing_document_fails() {
        let backend = MockBackend::new();
        let err = backend
            .update_document(POSTS, "gone", json!({"title": "x"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Backend(_)));
    }
}
