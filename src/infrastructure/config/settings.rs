//! Application configuration loading and validation.
//!
//! Everything comes from environment variables; a `.env` file is loaded into
//! the environment by the binary before this runs. The resulting [`Config`]
//! is passed explicitly to every component.
//!
//! # Example
//!
//! ```no_run
//! use stockwatch::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     println!("watching {}", config.watch.symbol);
//!     Ok(())
//! }
//! ```

use std::fmt;

use url::Url;

use super::watch::WatchConfig;
use crate::error::{ConfigError, Result};

/// Alpha Vantage query endpoint.
pub const DEFAULT_QUOTE_URL: &str = "https://www.alphavantage.co/query";

/// NewsAPI article search endpoint.
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/everything";

/// Twilio REST API root.
pub const DEFAULT_SMS_URL: &str = "https://api.twilio.com";

/// Optional overrides for the service endpoints.
pub const QUOTE_URL_VAR: &str = "QUOTE_API_URL";
pub const NEWS_URL_VAR: &str = "NEWS_API_URL";
pub const SMS_URL_VAR: &str = "SMS_API_URL";

/// Variables that must be present and non-empty.
pub const REQUIRED_VARS: [&str; 6] = [
    "STOCK_API_KEY",
    "NEWS_API_KEY",
    "ACCOUNT_SID",
    "AUTH_TOKEN",
    "FROM_NO",
    "TO_NO",
];

/// Keys for the two data APIs.
#[derive(Clone)]
pub struct ApiKeys {
    pub stock: String,
    pub news: String,
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeys")
            .field("stock", &"<redacted>")
            .field("news", &"<redacted>")
            .finish()
    }
}

/// Twilio account and message routing.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sender phone number.
    pub from: String,
    /// Recipient phone number.
    pub to: String,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

/// Base URLs of the external services.
#[derive(Debug, Clone)]
pub struct EndpointsConfig {
    pub quote_url: String,
    pub news_url: String,
    pub sms_url: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            quote_url: DEFAULT_QUOTE_URL.into(),
            news_url: DEFAULT_NEWS_URL.into(),
            sms_url: DEFAULT_SMS_URL.into(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_keys: ApiKeys,
    pub twilio: TwilioConfig,
    pub watch: WatchConfig,
    pub endpoints: EndpointsConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] naming every required variable
    /// that is unset or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .into_iter()
            .filter(|name| present(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingEnv { names: missing }.into());
        }

        let var = |name: &str| present(name).unwrap_or_default();

        let config = Self {
            api_keys: ApiKeys {
                stock: var("STOCK_API_KEY"),
                news: var("NEWS_API_KEY"),
            },
            twilio: TwilioConfig {
                account_sid: var("ACCOUNT_SID"),
                auth_token: var("AUTH_TOKEN"),
                from: var("FROM_NO"),
                to: var("TO_NO"),
            },
            watch: WatchConfig::default(),
            endpoints: EndpointsConfig {
                quote_url: present(QUOTE_URL_VAR).unwrap_or_else(|| DEFAULT_QUOTE_URL.into()),
                news_url: present(NEWS_URL_VAR).unwrap_or_else(|| DEFAULT_NEWS_URL.into()),
                sms_url: present(SMS_URL_VAR).unwrap_or_else(|| DEFAULT_SMS_URL.into()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when an endpoint is not an
    /// absolute URL.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            (QUOTE_URL_VAR, &self.endpoints.quote_url),
            (NEWS_URL_VAR, &self.endpoints.news_url),
            (SMS_URL_VAR, &self.endpoints.sms_url),
        ] {
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}
