pub mod format;
pub mod storage;

/// Client-side navigation by replacing the location href. No-op outside the
/// browser, which lets host tests exercise redirecting code paths safely.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.location().set_href(path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(_path: &str) {}

#[cfg(target_arch = "wasm32")]
pub fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_pathname() -> Option<String> {
    None
}
