//! This crate contains all shared UI for the Mini Blog client: the pure
//! view-model and controller layers, the auth observer, and the Dioxus
//! components that apply them to the page.

pub mod forms;
pub mod notify;
pub mod view;

mod context;
pub use context::{make_context, use_app_context, AppContext, PlatformStorage};

mod auth;
pub use auth::{apply_auth_change, use_auth, use_posts, AuthProvider, AuthState};

mod auth_bar;
pub use auth_bar::AuthBar;

mod auth_forms;
pub use auth_forms::AuthPanels;

mod compose;
pub use compose::{use_compose, ComposeForm, ComposeState};

mod search;
pub use search::{use_search, SearchBar, SearchQuery};

mod post_list;
pub use post_list::PostList;
