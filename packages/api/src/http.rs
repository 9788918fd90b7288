//! # HTTP implementation of the backend contract
//!
//! [`HttpBackend`] speaks the managed backend's JSON/HTTP surface:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | sign-up / sign-in | `POST {base}/v1/auth:signUp` / `…:signIn` with `{email, password}` |
//! | sign-out | `POST {base}/v1/auth:signOut` |
//! | add document | `POST {base}/v1/{collection}` → `{id}` |
//! | update document | `PATCH {base}/v1/{collection}/{id}` |
//! | delete document | `DELETE {base}/v1/{collection}/{id}` |
//! | list documents | `GET {base}/v1/{collection}?order_by=…&direction=…` |
//!
//! The project API key rides along as a `key` query parameter on every
//! request; the bearer token returned by sign-up/sign-in authenticates
//! document calls until sign-out drops it. Confirmed auth transitions are
//! pushed into the [`AuthEvents`] hub, which is what drives the UI.
//!
//! Timeouts and TLS behaviour are whatever `reqwest` defaults to; this
//! client imposes nothing of its own.

use std::sync::{Arc, Mutex};

use serde::Deserialize;
use serde_json::Value;

use crate::auth::AuthEvents;
use crate::backend::{Backend, Document, OrderBy};
use crate::config::BackendConfig;
use crate::error::ApiError;
use crate::models::Identity;

/// Production backend client.
#[derive(Clone)]
pub struct HttpBackend {
    inner: Arc<Inner>,
}

struct Inner {
    client: reqwest::Client,
    config: BackendConfig,
    token: Mutex<Option<String>>,
    events: AuthEvents,
}

#[derive(Deserialize)]
struct AuthResponse {
    uid: String,
    email: String,
    token: String,
}

#[derive(Deserialize)]
struct AddResponse {
    id: String,
}

#[derive(Deserialize)]
struct ListedDocument {
    id: String,
    #[serde(flatten)]
    fields: Value,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                client: reqwest::Client::new(),
                config,
                token: Mutex::new(None),
                events: AuthEvents::new(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/{path}", self.inner.config.base_url)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .inner
            .client
            .request(method, self.url(path))
            .query(&[("key", self.inner.config.api_key.as_str())]);
        if let Some(token) = self.inner.token.lock().unwrap().as_deref() {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }
        Err(Self::error_from(response).await)
    }

    /// Surface the backend's own message when it sent one; otherwise fall
    /// back to the status line.
    async fn error_from(response: reqwest::Response) -> ApiError {
        let status = response.status();
        tracing::debug!("backend call rejected with {status}");
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => ApiError::Backend(parsed.error.message),
            Err(_) => ApiError::Backend(format!("backend returned {status}")),
        }
    }

    async fn authenticate(&self, endpoint: &str, email: &str, password: &str) -> Result<Identity, ApiError> {
        let response = self
            .send(self.request(reqwest::Method::POST, endpoint).json(&serde_json::json!({
                "email": email,
                "password": password,
            })))
            .await?;
        let auth: AuthResponse = response.json().await?;

        *self.inner.token.lock().unwrap() = Some(auth.token);
        let identity = Identity {
            uid: auth.uid,
            email: auth.email,
        };
        self.inner.events.notify(Some(identity.clone()));
        Ok(identity)
    }
}

impl Backend for HttpBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        self.authenticate("auth:signUp", email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        self.authenticate("auth:signIn", email, password).await
    }

    async fn sign_out(&self) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::POST, "auth:signOut"))
            .await?;
        *self.inner.token.lock().unwrap() = None;
        self.inner.events.notify(None);
        Ok(())
    }

    async fn add_document(&self, collection: &str, fields: Value) -> Result<String, ApiError> {
        let response = self
            .send(self.request(reqwest::Method::POST, collection).json(&fields))
            .await?;
        let added: AddResponse = response.json().await?;
        Ok(added.id)
    }

    async fn update_document(
        &self,
        collection: &str,
        id: &str,
        fields: Value,
    ) -> Result<(), ApiError> {
        self.send(
            self.request(reqwest::Method::PATCH, &format!("{collection}/{id}"))
                .json(&fields),
        )
        .await?;
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::DELETE, &format!("{collection}/{id}")))
            .await?;
        Ok(())
    }

    async fn list_documents(
        &self,
        collection: &str,
        order: Option<OrderBy>,
    ) -> Result<Vec<Document>, ApiError> {
        let mut builder = self.request(reqwest::Method::GET, collection);
        if let Some(order) = order {
            let direction = if order.descending { "desc" } else { "asc" };
            builder = builder.query(&[("order_by", order.field), ("direction", direction)]);
        }

        let response = self.send(builder).await?;
        let listed: Vec<ListedDocument> = response.json().await?;
        Ok(listed
            .into_iter()
            .map(|doc| Document {
                id: doc.id,
                fields: doc.fields,
            })
            .collect())
    }

    fn auth_events(&self) -> &AuthEvents {
        &self.inner.events
    }
}
