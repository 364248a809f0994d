use serde::{Deserialize, Serialize};

/// Locales recognised in the URL path prefix (`/ms/wallet`, `/zh-CN/ranking`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ms")]
    Ms,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ms => "ms",
            Locale::ZhCn => "zh-CN",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Locale::En),
            "ms" => Some(Locale::Ms),
            "zh-CN" => Some(Locale::ZhCn),
            _ => None,
        }
    }

    /// Unrecognised or missing prefixes fall back to the default locale.
    pub fn from_path(pathname: &str) -> Self {
        pathname
            .trim_start_matches('/')
            .split('/')
            .next()
            .and_then(Self::from_tag)
            .unwrap_or_default()
    }

    /// Prefixes `path` with the locale tag; the default locale stays unprefixed.
    pub fn localize_path(self, path: &str) -> String {
        match self {
            Locale::En => path.to_string(),
            other => format!("/{}{}", other.tag(), path),
        }
    }

    /// Locale of the page currently shown in the browser.
    pub fn current() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.location().pathname().ok())
                .map(|p| Self::from_path(&p))
                .unwrap_or_default()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
