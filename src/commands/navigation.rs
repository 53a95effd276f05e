//! Navigation Commands

/// Leave the shop for `url`
pub fn navigate_to(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window
        .location()
        .set_href(url)
        .map_err(|e| format!("navigation to {} failed: {:?}", url, e))
}
