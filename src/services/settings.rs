use std::path::Path;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};

/// Cookie holding one browser's theme choice.
pub const THEME_COOKIE: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Client preferences that outlive a single page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Server default preferences, read once at startup. Each browser keeps its
/// own choice in the theme cookie, which always wins over the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsStore {
    defaults: Settings,
}

impl SettingsStore {
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the defaults from a JSON file. A missing or unreadable file
    /// yields the built-in defaults.
    pub async fn load(path: &Path) -> Self {
        let defaults = match tokio::fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice::<Settings>(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Settings file unreadable, using defaults"
                    );
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read settings file, using defaults"
                );
                Settings::default()
            }
        };

        tracing::info!(theme = defaults.theme.as_str(), "Default settings loaded");
        Self { defaults }
    }

    /// Settings in effect for the client that sent `jar`.
    pub fn for_client(&self, jar: &CookieJar) -> Settings {
        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|cookie| Theme::parse(cookie.value()))
            .unwrap_or(self.defaults.theme);
        Settings { theme }
    }

    pub fn theme_for(&self, jar: &CookieJar) -> Theme {
        self.for_client(jar).theme
    }
}

/// Long-lived cookie recording a theme choice for the whole site.
pub fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .same_site(SameSite::Lax)
        .http_only(true)
        .permanent()
        .build()
}
