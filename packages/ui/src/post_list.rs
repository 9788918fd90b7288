//! Post list: applies the computed view model to the page.
//!
//! The heavy lifting happens in [`crate::view::post_list`]; this component
//! walks the rows, wires the owner-only controls, and falls back to the
//! "no posts" placeholder when the filter leaves nothing.

use dioxus::prelude::*;

use crate::auth::{use_auth, use_posts};
use crate::compose::{use_compose, ComposeState};
use crate::context::use_app_context;
use crate::forms;
use crate::notify;
use crate::search::use_search;
use crate::view::{self, PostRow};

#[component]
pub fn PostList() -> Element {
    let auth = use_auth();
    let posts = use_posts();
    let query = use_search();

    let state = auth();
    let rows = view::post_list(&posts(), state.user.as_ref(), &query());

    rsx! {
        div {
            class: "posts",
            if rows.is_empty() {
                div { class: "notice", {view::NO_POSTS_NOTICE} }
            } else {
                for row in rows.iter() {
                    PostItem { key: "{row.id}", row: row.clone() }
                }
            }
        }
    }
}

#[component]
fn PostItem(row: PostRow) -> Element {
    let ctx = use_app_context();
    let mut posts = use_posts();
    let mut compose = use_compose();

    let edit_source = row.clone();
    let handle_edit = move |_| {
        compose.set(ComposeState {
            title: edit_source.title.clone(),
            content: edit_source.content.clone(),
            edit_id: Some(edit_source.id.clone()),
        });
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    };

    let delete_id = row.id.clone();
    let handle_delete = move |_| {
        if !notify::confirm("Delete this post?") {
            return;
        }
        let ctx = ctx.clone();
        let id = delete_id.clone();
        spawn(async move {
            if let Err(err) = forms::delete_post(&ctx.backend, &id).await {
                tracing::error!("delete failed: {err}");
                return;
            }
            match forms::load_posts(&ctx.backend).await {
                Ok(list) => posts.set(list),
                Err(err) => tracing::error!("post reload failed: {err}"),
            }
        });
    };

    rsx! {
        article {
            class: "post",
            h3 { class: "post-title", "{row.title}" }
            p { class: "post-content", "{row.content}" }
            div { class: "post-meta", "{row.meta}" }
            if row.can_edit {
                div {
                    class: "post-actions",
                    button { class: "btn btn-secondary", onclick: handle_edit, "Edit" }
                    button { class: "btn btn-danger", onclick: handle_delete, "Delete" }
                }
            }
        }
    }
}
