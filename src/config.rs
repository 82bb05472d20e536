use log::LevelFilter;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Name the function is deployed under.
pub const FUNCTION_NAME: &str = "CtWriteLambda";

/// Environment variable holding the configured log level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Logged in place of `LOG_LEVEL` when the variable is unset.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Configuration resolved once, before the handler is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Raw `LOG_LEVEL` value. `Some("")` when set but empty.
    pub log_level: Option<String>,
}

impl Config {
    pub fn new(log_level: Option<String>) -> Self {
        Config { log_level }
    }

    /// Resolves every variable through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            log_level: lookup(LOG_LEVEL_VAR),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(process_var)
    }

    /// `overrides` win; the process environment is consulted only when `inherit` is set.
    pub fn from_layers(overrides: &BTreeMap<String, String>, inherit: bool) -> Self {
        Self::from_lookup(|name| match overrides.get(name) {
            Some(value) => Some(value.clone()),
            None if inherit => process_var(name),
            None => None,
        })
    }

    /// Local invocation environment: `flags` beat the settings file's `[env]`
    /// table, which beats the process environment when `inherit` is set.
    pub fn from_sources(file: InvokeFile, flags: &[(String, String)], inherit: bool) -> Self {
        let mut overrides = file.env;
        overrides.extend(flags.iter().cloned());
        Self::from_layers(&overrides, inherit)
    }

    /// The value the handler reports.
    pub fn display_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Filter for the process log sink, `Info` unless `LOG_LEVEL` names a known level.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(parse_level)
            .unwrap_or(LevelFilter::Info)
    }
}

fn process_var(name: &str) -> Option<String> {
    env::var_os(name).map(|value| value.to_string_lossy().into_owned())
}

/// Parses `log` level names as well as Python's names and numeric levels.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<u32>() {
        return match number {
            0 => Some(LevelFilter::Trace),
            1..=10 => Some(LevelFilter::Debug),
            11..=20 => Some(LevelFilter::Info),
            21..=30 => Some(LevelFilter::Warn),
            31..=50 => Some(LevelFilter::Error),
            _ => Some(LevelFilter::Off),
        };
    }

    match raw.to_ascii_uppercase().as_str() {
        "NOTSET" => Some(LevelFilter::Trace),
        "WARNING" => Some(LevelFilter::Warn),
        "CRITICAL" | "FATAL" => Some(LevelFilter::Error),
        other => other.parse().ok(),
    }
}

/// Settings file read by the local invoke command (`Lambda.toml`).
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct InvokeFile {
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

#[derive(Debug)]
pub enum InvokeFileError {
    Io(io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for InvokeFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeFileError::Io(e) => write!(f, "can't read settings file: {}", e),
            InvokeFileError::Toml(e) => write!(f, "invalid settings file: {}", e),
        }
    }
}

impl std::error::Error for InvokeFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvokeFileError::Io(e) => Some(e),
            InvokeFileError::Toml(e) => Some(e),
        }
    }
}

impl InvokeFile {
    pub fn load(path: &Path) -> Result<Self, InvokeFileError> {
        let text = fs::read_to_string(path).map_err(InvokeFileError::Io)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, InvokeFileError> {
        toml::from_str(text).map_err(InvokeFileError::Toml)
    }
}
