//! Dialog Commands
//!
//! Blocking browser prompts.

/// Show a blocking message
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window for alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

/// Ask for confirmation. Anything but an explicit "OK" counts as declined.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}
