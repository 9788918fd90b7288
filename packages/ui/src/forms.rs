//! # Form controller flows
//!
//! The submission flows behind the register, login, logout and compose
//! forms, written against the [`Backend`] trait so tests can drive them with
//! a scripted backend. Each flow validates client-side before the first
//! backend call; backend rejections abort the flow and surface their message
//! verbatim. Single attempt, no rollback.

use api::{Backend, Identity, Post, Timestamp, UserProfile, NEWEST_FIRST, POSTS, USERS};
use store::{SessionMirror, SessionUser, StorageBackend};
use thiserror::Error;

/// Why a submission flow stopped.
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    /// Client-side validation failure; no backend call was made for it.
    #[error("{0}")]
    Invalid(String),
    /// The backend rejected a call; message shown verbatim.
    #[error("{0}")]
    Backend(String),
}

impl From<api::ApiError> for FormError {
    fn from(err: api::ApiError) -> Self {
        FormError::Backend(err.to_string())
    }
}

/// Successful registration or login: the identity plus the label for the
/// logged-in banner.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedIn {
    pub identity: Identity,
    pub display_name: String,
}

/// Register a new account and write its profile record.
///
/// Fails fast on an empty email or a password shorter than 6 characters.
/// On success the session mirror is updated and the display name is the
/// username, falling back to the email when blank.
pub async fn register<B: Backend, S: StorageBackend>(
    backend: &B,
    session: &SessionMirror<S>,
    username: &str,
    email: &str,
    password: &str,
) -> Result<SignedIn, FormError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FormError::Invalid("Email is required".to_string()));
    }
    if password.len() < 6 {
        return Err(FormError::Invalid(
            "Password must be at least 6 chars".to_string(),
        ));
    }

    let username = username.trim();
    let identity = backend.sign_up(email, password).await?;

    let profile = UserProfile {
        uid: identity.uid.clone(),
        email: identity.email.clone(),
        username: username.to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    backend
        .add_document(USERS, serde_json::to_value(&profile).map_err(api::ApiError::from)?)
        .await?;

    session.set_user(&SessionUser::from(&identity));

    let display_name = if username.is_empty() {
        identity.email.clone()
    } else {
        username.to_string()
    };
    Ok(SignedIn {
        identity,
        display_name,
    })
}

/// Sign an existing account in and resolve its display name.
pub async fn login<B: Backend, S: StorageBackend>(
    backend: &B,
    session: &SessionMirror<S>,
    email: &str,
    password: &str,
) -> Result<SignedIn, FormError> {
    let identity = backend.sign_in(email.trim(), password).await?;
    session.set_user(&SessionUser::from(&identity));

    let display_name = resolve_username(backend, &identity.uid, &identity.email).await;
    Ok(SignedIn {
        identity,
        display_name,
    })
}

/// End the backend session and drop the local mirror.
pub async fn logout<B: Backend, S: StorageBackend>(
    backend: &B,
    session: &SessionMirror<S>,
) -> Result<(), FormError> {
    backend.sign_out().await?;
    session.clear();
    Ok(())
}

/// Publish a new post or save an edit.
///
/// Requires an active session; rejects empty trimmed title or content. With
/// an edit id the existing document's title, content and `updatedAt` are
/// updated; otherwise a new document is added with the resolved author label
/// and server-assigned timestamps.
pub async fn submit_post<B: Backend, S: StorageBackend>(
    backend: &B,
    session: &SessionMirror<S>,
    title: &str,
    content: &str,
    edit_id: Option<&str>,
) -> Result<(), FormError> {
    let Some(current) = session.get_user() else {
        return Err(FormError::Invalid("Please login".to_string()));
    };

    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(FormError::Invalid(
            "Title and content are required".to_string(),
        ));
    }

    // The author label is looked up for edits too, matching how every
    // submission touches the profile store.
    let author = resolve_username(backend, &current.uid, &current.email).await;

    match edit_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            let fields = serde_json::json!({
                "title": title,
                "content": content,
                "updatedAt": Timestamp::server_set(),
            });
            backend.update_document(POSTS, id, fields).await?;
        }
        None => {
            let fields = serde_json::json!({
                "title": title,
                "content": content,
                "author": author,
                "createdAt": Timestamp::server_set(),
                "updatedAt": Timestamp::server_set(),
            });
            backend.add_document(POSTS, fields).await?;
        }
    }
    Ok(())
}

/// Delete a post by id. Confirmation happens in the component layer.
pub async fn delete_post<B: Backend>(backend: &B, id: &str) -> Result<(), api::ApiError> {
    backend.delete_document(POSTS, id).await
}

/// Fetch the full post list, newest first.
pub async fn load_posts<B: Backend>(backend: &B) -> Result<Vec<Post>, api::ApiError> {
    let docs = backend.list_documents(POSTS, Some(NEWEST_FIRST)).await?;
    docs.iter().map(Post::from_document).collect()
}

/// Best-effort display-name lookup: scan the `users` collection for the uid
/// and use its username when non-empty. Failures fall back to the email and
/// are never surfaced.
///
/// This is a full-collection read per call; the profile store offers no
/// point lookup by uid.
pub async fn resolve_username<B: Backend>(backend: &B, uid: &str, email: &str) -> String {
    match backend.list_documents(USERS, None).await {
        Ok(docs) => {
            for doc in &docs {
                if let Ok(profile) = doc.decode::<UserProfile>() {
                    if profile.uid == uid && !profile.username.is_empty() {
                        return profile.username;
                    }
                }
            }
            email.to_string()
        }
        Err(err) => {
            tracing::error!("username lookup failed: {err}");
            email.to_string()
        }
    }
}
