//! Browser client for the habit-challenge back-office and consumer apps:
//! typed API client, per-domain stores, role-based route guard and the
//! generic paged list/edit view models.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod locale;
pub mod pages;
pub mod permissions;
pub mod router;
pub mod state;
pub mod utils;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

/// Routes `log` output to the browser console and reports panics there.
/// Does nothing outside the browser.
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        if let Err(err) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("Logger already set: {}", err).into());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    init_logging();
    log::info!("Starting habit frontend");
    // window.__HABIT_ENV (env.js) wins over ./config.json when present.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
    });
}
