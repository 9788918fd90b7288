//! Blocking user notifications.
//!
//! Validation and backend failures are shown through the browser's modal
//! dialogs on the web platform; native builds log them instead.

/// Show a blocking message.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("{message}");
}

/// Ask a blocking yes/no question. Non-web builds answer yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    let _ = message;
    true
}
