use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__TRAFFIX_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__TRAFFIX_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_window_config() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__TRAFFIX_CONFIG = { api_base_url: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__TRAFFIX_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"api_base_url".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"API_BASE_URL".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_url) = get_from_env_js() {
        return Some(env_url);
    }
    get_from_window_config()
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() {
        return;
    }
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__TRAFFIX_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::warn!("No runtime config found, falling back to {DEFAULT_API_BASE_URL}");
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
