//! Runtime configuration read from environment variables.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::SceneCatalog;
use crate::types::Locale;

/// Default input poll interval (about 30 redraw checks per second).
pub const DEFAULT_POLL_MS: u64 = 33;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// JSON scene catalog; `None` uses the built-in scenes.
    pub scenes_path: Option<PathBuf>,
    pub locale: Locale,
    /// Log file; `None` disables logging (stderr belongs to the terminal UI).
    pub log_path: Option<PathBuf>,
    pub poll_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            scenes_path: None,
            locale: Locale::default(),
            log_path: None,
            poll_ms: DEFAULT_POLL_MS,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// - `LIGHT_CATCHER_SCENES`: path of a JSON scene catalog
    /// - `LIGHT_CATCHER_LOCALE`: `zh-TW` or `en`
    /// - `LIGHT_CATCHER_LOG_PATH`: log file
    /// - `LIGHT_CATCHER_POLL_MS`: input poll interval in milliseconds
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let scenes_path = non_empty(lookup("LIGHT_CATCHER_SCENES")).map(PathBuf::from);
        let locale = non_empty(lookup("LIGHT_CATCHER_LOCALE"))
            .and_then(|s| Locale::from_str(&s))
            .unwrap_or(defaults.locale);
        let log_path = non_empty(lookup("LIGHT_CATCHER_LOG_PATH")).map(PathBuf::from);
        let poll_ms = non_empty(lookup("LIGHT_CATCHER_POLL_MS"))
            .and_then(|s| s.parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.poll_ms);

        Self {
            scenes_path,
            locale,
            log_path,
            poll_ms,
        }
    }

    /// Load the configured scene catalog (or the built-in one).
    pub fn load_catalog(&self) -> Result<SceneCatalog> {
        match &self.scenes_path {
            Some(path) => SceneCatalog::load(path)
                .with_context(|| format!("loading scenes from {}", path.display())),
            None => Ok(SceneCatalog::builtin()),
        }
    }
}
