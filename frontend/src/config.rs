use serde::{Deserialize, Serialize};
use std::{str::FromStr, sync::OnceLock, time::Duration};
use thiserror::Error;

pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;

/// What the submit coordinator consults before delegating to login.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPolicy {
    /// Trust the last debounced aggregate, even if a later keystroke made it stale.
    #[default]
    Debounced,
    /// Recompute the aggregate from the live field validities at submit time.
    Revalidate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub debounce_ms: Option<u64>,
    pub submit_policy: Option<SubmitPolicy>,
    pub log_level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub debounce: Duration,
    pub submit_policy: SubmitPolicy,
    pub log_level: log::Level,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            submit_policy: SubmitPolicy::default(),
            log_level: log::Level::Info,
        }
    }
}

impl RuntimeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn resolve(&self) -> Result<FormConfig, ConfigError> {
        let defaults = FormConfig::default();
        let log_level = match self.log_level.as_deref() {
            Some(raw) => log::Level::from_str(raw.trim())
                .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
            None => defaults.log_level,
        };
        Ok(FormConfig {
            debounce: self
                .debounce_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.debounce),
            submit_policy: self.submit_policy.unwrap_or(defaults.submit_policy),
            log_level,
        })
    }
}

static FORM_CONFIG: OnceLock<FormConfig> = OnceLock::new();

// Optional global: window.__LOGINFORM_CONFIG = { debounce_ms: 2000, submit_policy: "debounced" }
#[cfg(target_arch = "wasm32")]
fn read_window_config() -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__LOGINFORM_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    js_sys::JSON::stringify(&any).ok().map(String::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_window_config() -> Option<String> {
    None
}

fn load() -> Result<FormConfig, ConfigError> {
    match read_window_config() {
        Some(raw) => RuntimeConfig::from_json(&raw)?.resolve(),
        None => Ok(FormConfig::default()),
    }
}

/// Loads and caches the runtime config. On error the defaults are cached and
/// the error is handed back so it can be logged once a logger exists.
pub fn init() -> Result<FormConfig, ConfigError> {
    let loaded = load();
    let config = *FORM_CONFIG.get_or_init(|| loaded.as_ref().copied().unwrap_or_default());
    loaded.map(|_| config)
}

pub fn form_config() -> FormConfig {
    *FORM_CONFIG.get_or_init(|| load().unwrap_or_default())
}
