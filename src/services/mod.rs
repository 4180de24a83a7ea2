pub mod settings;

pub use settings::{theme_cookie, Settings, SettingsStore, Theme, THEME_COOKIE};
