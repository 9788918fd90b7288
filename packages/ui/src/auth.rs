//! Auth observer: drives the session mirror and the UI from backend
//! auth-state notifications.
//!
//! [`AuthProvider`] opens the one long-lived subscription at startup and is
//! authoritative for backend-confirmed transitions; form handlers update the
//! same state locally for responsiveness. The per-notification work lives in
//! [`apply_auth_change`], which is pure enough to test with a scripted
//! backend.

use api::{Backend, Identity, Post};
use dioxus::prelude::*;
use store::{SessionMirror, SessionUser, StorageBackend};

use crate::context::use_app_context;
use crate::forms::{load_posts, resolve_username};

/// Auth-driven UI state.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    /// Label for the signed-in banner: username, falling back to email.
    pub display_name: String,
    /// True until the first auth notification arrives.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            display_name: String::new(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn logged_out() -> Self {
        Self {
            user: None,
            display_name: String::new(),
            loading: false,
        }
    }

    pub fn signed_in(user: SessionUser, display_name: String) -> Self {
        Self {
            user: Some(user),
            display_name,
            loading: false,
        }
    }
}

/// Apply one auth-state notification.
///
/// Present user: mirror it, resolve the display name, reload posts.
/// Absent: clear the mirror and do not touch the backend. The returned
/// post list is `None` when no reload happened (including reload failures,
/// which are logged and otherwise dropped).
pub async fn apply_auth_change<B: Backend, S: StorageBackend>(
    backend: &B,
    session: &SessionMirror<S>,
    identity: Option<Identity>,
) -> (AuthState, Option<Vec<Post>>) {
    match identity {
        Some(identity) => {
            let user = SessionUser::from(&identity);
            session.set_user(&user);
            let display_name = resolve_username(backend, &identity.uid, &identity.email).await;
            let posts = match load_posts(backend).await {
                Ok(posts) => Some(posts),
                Err(err) => {
                    tracing::error!("post reload failed: {err}");
                    None
                }
            };
            (AuthState::signed_in(user, display_name), posts)
        }
        None => {
            session.clear();
            (AuthState::logged_out(), None)
        }
    }
}

/// The current authentication state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The most recently loaded post list, newest first.
pub fn use_posts() -> Signal<Vec<Post>> {
    use_context::<Signal<Vec<Post>>>()
}

/// Provider component that owns the auth subscription.
///
/// Wrap the app with this; it provides the [`AuthState`] and post-list
/// signals and keeps them in sync with the backend for the life of the page
/// session.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let ctx = use_app_context();
    let mut auth_state = use_signal(AuthState::default);
    let mut posts = use_signal(Vec::<Post>::new);

    use_context_provider(|| auth_state);
    use_context_provider(|| posts);

    let _ = use_future(move || {
        let ctx = ctx.clone();
        async move {
            let mut subscription = ctx.backend.auth_events().subscribe();
            while let Some(change) = subscription.next().await {
                let (state, reloaded) =
                    apply_auth_change(&ctx.backend, &ctx.session, change).await;
                auth_state.set(state);
                if let Some(list) = reloaded {
                    posts.set(list);
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::mock::{Call, MockBackend};
    use api::USERS;
    use serde_json::json;
    use store::MemoryBackend;

    fn identity(uid: &str, email: &str) -> Identity {
        Identity {
            uid: uid.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_present_user_is_mirrored_and_posts_reload() {
        let backend = MockBackend::new();
        backend.seed_document(
            USERS,
            "u1",
            json!({"uid": "uid-1", "email": "sam@x.com", "username": "sam"}),
        );
        let session = SessionMirror::new(MemoryBackend::new());

        let (state, posts) =
            apply_auth_change(&backend, &session, Some(identity("uid-1", "sam@x.com"))).await;

        assert_eq!(session.get_user().unwrap().uid, "uid-1");
        assert_eq!(state.display_name, "sam");
        assert!(!state.loading);
        assert_eq!(posts, Some(Vec::new()));
    }

    #[tokio::test]
    async fn test_absent_user_clears_mirror_without_backend_reads() {
        let backend = MockBackend::new();
        let session = SessionMirror::new(MemoryBackend::new());
        session.set_user(&SessionUser {
            uid: "uid-1".to_string(),
            email: "sam@x.com".to_string(),
        });

        let (state, posts) = apply_auth_change(&backend, &session, None).await;

        assert!(session.get_user().is_none());
        assert!(state.user.is_none());
        assert_eq!(posts, None);
        assert!(!backend.calls().iter().any(|call| matches!(call, Call::List { .. })));
    }
}
