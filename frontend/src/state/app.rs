use leptos::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::utils::storage::{self as storage_utils, KeyValueStorage, APP_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Back-office UI language; independent of the consumer URL locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub collapsed: bool,
    pub theme: Theme,
    pub language: Language,
}

/// Admin shell preferences, persisted as one JSON entry under `app`.
#[derive(Clone)]
pub struct AppStore {
    state: RwSignal<AppState>,
    storage: Option<Rc<dyn KeyValueStorage>>,
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(AppState::default()),
            storage: None,
        }
    }

    pub fn persisted(storage: Rc<dyn KeyValueStorage>) -> Self {
        let saved = storage_utils::read_json::<AppState>(storage.as_ref(), APP_KEY)
            .unwrap_or_default();
        Self {
            state: create_rw_signal(saved),
            storage: Some(storage),
        }
    }

    pub fn state(&self) -> ReadSignal<AppState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> AppState {
        self.state.get_untracked()
    }

    pub fn toggle_sidebar(&self) {
        self.state.update(|s| s.collapsed = !s.collapsed);
        self.persist();
    }

    pub fn set_collapsed(&self, collapsed: bool) {
        self.state.update(|s| s.collapsed = collapsed);
        self.persist();
    }

    pub fn set_theme(&self, theme: Theme) {
        self.state.update(|s| s.theme = theme);
        self.persist();
    }

    pub fn toggle_theme(&self) {
        self.state.update(|s| s.theme = s.theme.toggled());
        self.persist();
    }

    pub fn set_language(&self, language: Language) {
        self.state.update(|s| s.language = language);
        self.persist();
    }

    pub fn reset(&self) {
        self.state.set(AppState::default());
        if let Some(storage) = &self.storage {
            storage.remove_item(APP_KEY);
        }
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        let snapshot = self.snapshot();
        if let Err(err) = storage_utils::write_json(storage.as_ref(), APP_KEY, &snapshot) {
            log::warn!("Failed to persist app preferences: {}", err);
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>().unwrap_or_default()
}
