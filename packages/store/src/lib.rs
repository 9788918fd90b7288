//! Local durable storage for the Mini Blog client.
//!
//! The only thing this crate persists is the session mirror: a minimal copy
//! of the authenticated identity kept in local key-value storage so the UI
//! can make synchronous "is someone logged in" decisions. The backend's own
//! session is always authoritative.

pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryBackend;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageBackend;

pub use models::SessionUser;
pub use session::{SessionMirror, StorageBackend, SESSION_KEY};
