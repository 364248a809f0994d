use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

impl RuntimeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static REQUEST_TIMEOUT_MS: OnceLock<u64> = OnceLock::new();

fn cache_runtime_config(cfg: &RuntimeConfig) {
    if let Some(ms) = cfg.request_timeout_ms {
        let _ = REQUEST_TIMEOUT_MS.set(ms);
    }
}

/// Timeout from the loaded runtime config; the default until one is loaded.
pub fn request_timeout() -> Duration {
    RuntimeConfig {
        api_base_url: None,
        request_timeout_ms: REQUEST_TIMEOUT_MS.get().copied(),
    }
    .request_timeout()
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        // Expect optional global object: window.<global> = { API_BASE_URL: "..." }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__HABIT_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__HABIT_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub async fn fetch_runtime_config() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = browser::fetch_runtime_config().await {
        cache_runtime_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    log::info!("No runtime config found, using {}", DEFAULT_API_BASE_URL);
    cache_base_url(DEFAULT_API_BASE_URL)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_runtime_config(&RuntimeConfig {
        api_base_url: None,
        request_timeout_ms: std::env::var("HABIT_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|ms| ms.trim().parse().ok()),
    });
    match std::env::var("HABIT_API_BASE_URL") {
        Ok(url) if !url.trim().is_empty() => cache_base_url(&url),
        _ => cache_base_url(DEFAULT_API_BASE_URL),
    }
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("Runtime config initialized (api base: {})", base);
}
