//! The single page: auth panels while logged out, the blog panel while
//! logged in. The auth observer decides which.

use dioxus::prelude::*;
use ui::{
    use_auth, AuthBar, AuthPanels, ComposeForm, ComposeState, PostList, SearchBar, SearchQuery,
};

#[component]
pub fn Home() -> Element {
    use_context_provider(|| SearchQuery(Signal::new(String::new())));
    use_context_provider(|| Signal::new(ComposeState::default()));

    let auth = use_auth();
    let state = auth();

    rsx! {
        header {
            class: "masthead",
            h1 { "Mini Blog" }
        }

        if state.loading {
            div { class: "notice", "Loading…" }
        } else if state.user.is_some() {
            AuthBar {}
            main {
                class: "app-panel",
                ComposeForm {}
                SearchBar {}
                PostList {}
            }
        } else {
            main {
                class: "auth-wrap",
                AuthPanels {}
                div { class: "notice", {ui::view::LOGGED_OUT_NOTICE} }
            }
        }
    }
}
