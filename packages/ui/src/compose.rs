//! Compose form: publish a new post or save an edit.

use dioxus::prelude::*;

use crate::auth::use_posts;
use crate::context::use_app_context;
use crate::forms;
use crate::notify;

/// Compose-form state, shared between the form itself and the post list's
/// edit buttons. An `edit_id` switches the form into edit mode.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposeState {
    pub title: String,
    pub content: String,
    pub edit_id: Option<String>,
}

/// The compose-form signal provided by the blog view.
pub fn use_compose() -> Signal<ComposeState> {
    use_context::<Signal<ComposeState>>()
}

#[component]
pub fn ComposeForm() -> Element {
    let ctx = use_app_context();
    let mut compose = use_compose();
    let mut posts = use_posts();

    let editing = compose().edit_id.is_some();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let ctx = ctx.clone();
        spawn(async move {
            let state = compose();
            let result = forms::submit_post(
                &ctx.backend,
                &ctx.session,
                &state.title,
                &state.content,
                state.edit_id.as_deref(),
            )
            .await;

            match result {
                Ok(()) => {
                    compose.set(ComposeState::default());
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
        form {
            class: "compose-form",
            onsubmit: handle_submit,

            input {
                class: "compose-title",
                r#type: "text",
                placeholder: "Title",
                value: compose().title,
                oninput: move |evt| compose.write().title = evt.value(),
            }
            textarea {
                class: "compose-content",
                placeholder: "Write something…",
                value: compose().content,
                oninput: move |evt| compose.write().content = evt.value(),
            }
            div {
                class: "compose-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    if editing { "Save Changes" } else { "Publish" }
                }
                if editing {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| compose.set(ComposeState::default()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
