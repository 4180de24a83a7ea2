use std::env;
use std::path::PathBuf;

const DEFAULT_SPOTLIGHT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Remote store (optional, demo fixtures are served when unset)
    pub supabase: Option<SupabaseConfig>,

    // Theme preference file (optional, kept in memory when unset)
    pub settings_path: Option<PathBuf>,

    // Number of recent predictions shown per spotlight card
    pub spotlight_recent_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            supabase: None,
            settings_path: None,
            spotlight_recent_limit: DEFAULT_SPOTLIGHT_RECENT_LIMIT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let supabase = match (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(SupabaseConfig { url, anon_key }),
            (Some(_), None) => {
                anyhow::bail!("SUPABASE_ANON_KEY must be set when SUPABASE_URL is set")
            }
            (None, _) => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: get("PORT").unwrap_or_else(|| "8080".into()).parse()?,
            supabase,
            settings_path: get("SETTINGS_PATH").map(PathBuf::from),
            spotlight_recent_limit: match get("SPOTLIGHT_RECENT_LIMIT") {
                Some(raw) => raw.parse()?,
                None => DEFAULT_SPOTLIGHT_RECENT_LIMIT,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.supabase.is_none());
        assert!(config.settings_path.is_none());
        assert_eq!(config.spotlight_recent_limit, 3);
    }

    #[test]
    fn test_supabase_configured() {
        let config = config_from(&[
            ("SUPABASE_URL", "https://demo.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("PORT", "3000"),
        ])
        .unwrap();
        let supabase = config.supabase.unwrap();
        assert_eq!(supabase.url, "https://demo.supabase.co");
        assert_eq!(supabase.anon_key, "anon");
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_url_without_key_is_error() {
        assert!(config_from(&[("SUPABASE_URL", "https://demo.supabase.co")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_error() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = config_from(&[("SUPABASE_URL", "  "), ("SETTINGS_PATH", "")]).unwrap();
        assert!(config.supabase.is_none());
        assert!(config.settings_path.is_none());
    }
}
