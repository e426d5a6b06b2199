//! Durable bearer-token storage. One key, written only by the session layer.
//!
//! In the browser this is `localStorage`; on native targets (host test runs)
//! a thread-local slot stands in so the persist/clear paths are exercised by
//! `cargo test` without a DOM.

const TOKEN_KEY: &str = "token";

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::TOKEN_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get() -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    pub fn set(token: &str) -> Result<(), String> {
        local_storage()
            .ok_or_else(|| "No localStorage".to_string())?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;

    thread_local! {
        static TOKEN: RefCell<Option<String>> = RefCell::new(None);
    }

    pub fn get() -> Option<String> {
        TOKEN.with(|slot| slot.borrow().clone())
    }

    pub fn set(token: &str) -> Result<(), String> {
        TOKEN.with(|slot| *slot.borrow_mut() = Some(token.to_string()));
        Ok(())
    }

    pub fn clear() {
        TOKEN.with(|slot| *slot.borrow_mut() = None);
    }
}

pub fn stored_token() -> Option<String> {
    backend::get()
}

pub fn store_token(token: &str) -> Result<(), String> {
    backend::set(token)
}

pub fn clear_token() {
    backend::clear();
}
