use leptos::*;
use std::rc::Rc;

pub const LOGIN_PATH: &str = "/login";
/// Consumer sign-in screen, before any locale prefix.
pub const CONSUMER_LOGIN_PATH: &str = "/auth/login";
pub const NOT_FOUND_PATH: &str = "/404";

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Full-page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        navigate_to(path);
    }
}

pub fn navigate_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if location.pathname().map(|p| p == path).unwrap_or(false) {
                return;
            }
            let _ = location.set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("navigation to {} ignored outside the browser", path);
    }
}

/// Navigator shared through the reactive context.
#[derive(Clone)]
pub struct NavigatorHandle(pub Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn navigate(&self, path: &str) {
        self.0.navigate(path);
    }
}

pub fn provide_navigator(navigator: impl Navigator + 'static) {
    provide_context(NavigatorHandle::new(navigator));
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>().unwrap_or_else(|| NavigatorHandle::new(BrowserNavigator))
}
