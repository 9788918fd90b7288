//! # API crate — client for the managed backend
//!
//! Everything the Mini Blog client knows about the external backend (the
//! identity provider and the document store) lives here. The UI crates never
//! see HTTP; they talk to the [`Backend`] trait.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Push-based auth-state notification hub and its subscription handle |
//! | [`backend`] | The [`Backend`] trait, document and ordering types, collection names |
//! | [`config`] | [`BackendConfig`] — base URL and API key, from env or explicit |
//! | [`error`] | [`ApiError`] — transport, backend-reported, and decode failures |
//! | [`http`] | [`HttpBackend`] — the production `reqwest` implementation |
//! | [`mock`] | Scripted in-memory backend for tests (`mock` feature) |
//! | [`models`] | [`Identity`], [`Post`], [`UserProfile`], [`Timestamp`] |

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod models;

mod http;
pub use http::HttpBackend;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use auth::{AuthEvents, AuthSubscription};
pub use backend::{Backend, Document, OrderBy, NEWEST_FIRST, POSTS, USERS};
pub use config::BackendConfig;
pub use error::ApiError;
pub use models::{Identity, Post, Timestamp, UserProfile};
