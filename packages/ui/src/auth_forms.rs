//! Registration and login panels, shown while logged out.
//!
//! The submit handlers set the auth state locally for responsiveness; the
//! auth observer confirms (or corrects) the transition when the backend's
//! own notification arrives.

use dioxus::prelude::*;
use store::SessionUser;

use crate::auth::{use_auth, use_posts, AuthState};
use crate::context::use_app_context;
use crate::forms;
use crate::notify;

#[component]
pub fn AuthPanels() -> Element {
    let ctx = use_app_context();
    let mut auth = use_auth();
    let mut posts = use_posts();

    let mut reg_username = use_signal(String::new);
    let mut reg_email = use_signal(String::new);
    let mut reg_password = use_signal(String::new);
    let mut login_email = use_signal(String::new);
    let mut login_password = use_signal(String::new);

    let register_ctx = ctx.clone();
    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = register_ctx.clone();
        spawn(async move {
            let result = forms::register(
                &ctx.backend,
                &ctx.session,
                &reg_username(),
                &reg_email(),
                &reg_password(),
            )
            .await;

            match result {
                Ok(signed_in) => {
                    auth.set(AuthState::signed_in(
                        SessionUser::from(&signed_in.identity),
                        signed_in.display_name,
                    ));
                    // Both auth forms are cleared after a registration.
                    reg_username.set(String::new());
                    reg_email.set(String::new());
                    reg_password.set(String::new());
                    login_email.set(String::new());
                    login_password.set(String::new());
                    match forms::load_posts(&ctx.backend).await {
                        Ok(list) => posts.set(list),
                        Err(err) => tracing::error!("post reload failed: {err}"),
                    }
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    let login_ctx = ctx.clone();
    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = login_ctx.clone();
        spawn(async move {
            let result =
                forms::login(&ctx.backend, &ctx.session, &login_email(), &login_password()).await;

            match result {
                Ok(signed_in) => {
                    auth.set(AuthState::signed_in(
                        SessionUser::from(&signed_in.identity),
                        signed_in.display_name,
                    ));
                    login_email.set(String::new());
                    login_password.set(String::new());
                    match forms::load_posts(&ctx.backend).await {
                        Ok(list) => posts.set(list),
                        Err(err) => tracing::error!("post reload failed: {err}"),
                    }
                }
                Err(err) => notify::alert(&err.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "auth-panels",

            form {
                class: "auth-panel",
                onsubmit: handle_register,

                h2 { "Register" }
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: reg_username(),
                    oninput: move |evt| reg_username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: reg_email(),
                    oninput: move |evt| reg_email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password (min 6 chars)",
                    value: reg_password(),
                    oninput: move |evt| reg_password.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Create account" }
            }

            form {
                class: "auth-panel",
                onsubmit: handle_login,

                h2 { "Login" }
                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: login_email(),
                    oninput: move |evt| login_email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: login_password(),
                    oninput: move |evt| login_password.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Login" }
            }
        }
    }
}
