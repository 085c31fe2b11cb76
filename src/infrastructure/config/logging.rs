//! Logging configuration and initialization.

use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
///
/// Read from `LOG_LEVEL` and `LOG_FORMAT`; `RUST_LOG` wins over `LOG_LEVEL`
/// when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Read logging settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read logging settings through `lookup`, falling back to defaults.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            level: non_empty("LOG_LEVEL").unwrap_or(defaults.level),
            format: non_empty("LOG_FORMAT").unwrap_or(defaults.format),
        }
    }

    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = LoggingConfig::from_lookup(|_| None);
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn reads_level_and_format() {
        let config = LoggingConfig::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("debug".into()),
            "LOG_FORMAT" => Some("json".into()),
            _ => None,
        });
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, "json");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = LoggingConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config, LoggingConfig::default());
    }
}
