use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::effects::accordion::DEFAULT_EXPANDED;
use crate::effects::GlowOpacity;

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Portfolio JSON. `None` serves the bundled sample.
    pub content_path: Option<PathBuf>,
    /// Theme preference file. `None` keeps the preference in memory.
    pub theme_store_path: Option<PathBuf>,
    /// Hero typing speed; zero or negative reveals the whole line at once.
    pub typing_char_interval_ms: i64,
    pub typing_initial_delay_ms: i64,
    pub reveal_threshold: f64,
    pub accordion_expanded: Vec<usize>,
    pub glow: GlowOpacity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            content_path: None,
            theme_store_path: None,
            typing_char_interval_ms: 40,
            typing_initial_delay_ms: 600,
            reveal_threshold: 0.08,
            accordion_expanded: DEFAULT_EXPANDED.to_vec(),
            glow: GlowOpacity::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset or empty keys take the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        Ok(Config {
            port: parse_or(get("PORT"), defaults.port)
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or(defaults.rust_log),
            content_path: get("CONTENT_PATH").map(PathBuf::from),
            theme_store_path: get("THEME_STORE_PATH").map(PathBuf::from),
            typing_char_interval_ms: parse_or(
                get("TYPING_CHAR_INTERVAL_MS"),
                defaults.typing_char_interval_ms,
            )
            .context("TYPING_CHAR_INTERVAL_MS must be an integer")?,
            typing_initial_delay_ms: parse_or(
                get("TYPING_INITIAL_DELAY_MS"),
                defaults.typing_initial_delay_ms,
            )
            .context("TYPING_INITIAL_DELAY_MS must be an integer")?,
            reveal_threshold: parse_or(get("REVEAL_THRESHOLD"), defaults.reveal_threshold)
                .context("REVEAL_THRESHOLD must be a number")?,
            accordion_expanded: match get("ACCORDION_EXPANDED") {
                Some(raw) => parse_index_list(&raw)
                    .context("ACCORDION_EXPANDED must be a comma-separated list of indices")?,
                None => defaults.accordion_expanded,
            },
            glow: GlowOpacity {
                dark: parse_or(get("GLOW_OPACITY_DARK"), defaults.glow.dark)
                    .context("GLOW_OPACITY_DARK must be a number")?,
                light: parse_or(get("GLOW_OPACITY_LIGHT"), defaults.glow.light)
                    .context("GLOW_OPACITY_LIGHT must be a number")?,
            },
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => Ok(raw.trim().parse::<T>()?),
        None => Ok(default),
    }
}

fn parse_index_list(raw: &str) -> Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<usize>().with_context(|| format!("'{s}' is not an index")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.typing_char_interval_ms, 40);
        assert_eq!(config.typing_initial_delay_ms, 600);
        assert_eq!(config.accordion_expanded, vec![0, 1]);
        assert!(config.content_path.is_none());
        assert!(config.theme_store_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("CONTENT_PATH", "/srv/portfolio.json"),
            ("TYPING_CHAR_INTERVAL_MS", "-1"),
            ("REVEAL_THRESHOLD", "0.25"),
            ("ACCORDION_EXPANDED", "2, 0"),
            ("GLOW_OPACITY_LIGHT", "0.15"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/portfolio.json")));
        assert_eq!(config.typing_char_interval_ms, -1);
        assert_eq!(config.reveal_threshold, 0.25);
        assert_eq!(config.accordion_expanded, vec![2, 0]);
        assert_eq!(config.glow.light, 0.15);
        assert_eq!(config.glow.dark, 0.6);
    }

    #[test]
    fn test_empty_accordion_list_collapses_all() {
        let config = config_from(&[("ACCORDION_EXPANDED", ",")]).unwrap();
        assert!(config.accordion_expanded.is_empty());
    }

    #[test]
    fn test_bad_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_bad_index_list_fails() {
        assert!(config_from(&[("ACCORDION_EXPANDED", "0,x")]).is_err());
    }
}
