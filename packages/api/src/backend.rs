//! # Backend trait — the client contract this app consumes
//!
//! The managed backend is two services behind one handle: an identity
//! provider (sign-up, sign-in, sign-out, auth-state notifications) and a
//! document store (schemaless JSON documents in named collections, with a
//! server-assigned timestamp sentinel).
//!
//! Controllers and the auth observer are written against this trait so that
//! tests can substitute [`crate::mock::MockBackend`] for the production
//! [`crate::HttpBackend`]. All calls are single-attempt: no local retries,
//! no local timeouts, no cancellation once issued.

use serde_json::Value;

use crate::auth::AuthEvents;
use crate::error::ApiError;
use crate::models::Identity;

/// The posts collection.
pub const POSTS: &str = "posts";
/// The user-profile collection.
pub const USERS: &str = "users";

/// A stored document: backend-assigned id plus its JSON fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

impl Document {
    /// Decode the stored fields into a typed record.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.fields.clone())?)
    }
}

/// Sort directive for [`Backend::list_documents`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderBy {
    pub field: &'static str,
    pub descending: bool,
}

/// The ordering every post-list read uses.
pub const NEWEST_FIRST: OrderBy = OrderBy {
    field: "createdAt",
    descending: true,
};

/// Client contract for the managed backend.
pub trait Backend {
    /// Create an identity with the identity provider.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ApiError>;

    /// Sign an existing identity in.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ApiError>;

    /// End the backend session.
    async fn sign_out(&self) -> Result<(), ApiError>;

    /// Add a document; the backend assigns and returns the id.
    async fn add_document(&self, collection: &str, fields: Value) -> Result<String, ApiError>;

    /// Merge fields into an existing document.
    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<(), ApiError>;

    /// Delete a document by id.
    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), ApiError>;

    /// List a collection, optionally server-ordered.
    async fn list_documents(
        &self,
        collection: &str,
        order: Option<OrderBy>,
    ) -> Result<Vec<Document>, ApiError>;

    /// The auth-state notification hub for this client.
    fn auth_events(&self) -> &AuthEvents;
}
