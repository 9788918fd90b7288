//! Shared application context for all platforms.
//!
//! One explicit object carries everything the controllers and views need:
//! the backend handle and the session mirror. It is constructed once in the
//! app shell and threaded through the component tree as Dioxus context, so
//! nothing reaches for ambient globals.

use api::{BackendConfig, HttpBackend};
use dioxus::prelude::*;
use store::SessionMirror;

/// The storage backend for this platform:
/// - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageBackend`]
/// - **Native**: process-local memory via [`store::MemoryBackend`]
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = store::LocalStorageBackend;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStorage = store::MemoryBackend;

/// Application context: backend client plus local session mirror.
#[derive(Clone)]
pub struct AppContext {
    pub backend: HttpBackend,
    pub session: SessionMirror<PlatformStorage>,
}

/// Build the context from the environment-provided backend settings.
pub fn make_context() -> AppContext {
    let backend = HttpBackend::new(BackendConfig::from_env());

    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    let session = SessionMirror::new(store::LocalStorageBackend::new());
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    let session = SessionMirror::new(store::MemoryBackend::new());

    AppContext { backend, session }
}

/// The context provided by the app shell.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}
