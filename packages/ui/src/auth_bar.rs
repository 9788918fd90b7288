//! Signed-in banner: welcome label plus the logout control.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::compose::{use_compose, ComposeState};
use crate::context::use_app_context;
use crate::forms;
use crate::notify;

#[component]
pub fn AuthBar() -> Element {
    let ctx = use_app_context();
    let mut auth = use_auth();
    let mut compose = use_compose();

    let handle_logout = move |_| {
        let ctx = ctx.clone();
        spawn(async move {
            match forms::logout(&ctx.backend, &ctx.session).await {
                Ok(()) => {
                    auth.set(AuthState::logged_out());
                    compose.set(ComposeState::default());
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "auth-bar",
            span { class: "welcome", "Hi, {auth().display_name}" }
            button {
                class: "btn btn-secondary",
                onclick: handle_logout,
                "Logout"
            }
        }
    }
}
