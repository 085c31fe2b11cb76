//! What the job watches and when it alerts.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::RelevanceFilter;

/// Watched security, news search terms and alerting limits.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Ticker symbol passed to the quote API.
    pub symbol: String,
    /// Company name used in the message text.
    pub company: String,
    /// Free-text news search query.
    pub news_query: String,
    /// Language filter passed to the news API.
    pub news_language: String,
    /// A title must contain one of these to be relevant.
    pub keywords: Vec<String>,
    /// Titles containing this are provider-redacted placeholders.
    pub removed_marker: String,
    /// Minimum percentage move (inclusive) that triggers an alert.
    pub threshold: Decimal,
    /// Maximum number of messages per run.
    pub max_alerts: usize,
    /// Pause after each send attempt.
    pub send_delay: Duration,
}

impl WatchConfig {
    #[must_use]
    pub fn relevance_filter(&self) -> RelevanceFilter {
        RelevanceFilter::new(self.keywords.iter().cloned(), self.removed_marker.clone())
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            symbol: "TSLA".into(),
            company: "Tesla".into(),
            news_query: "tesla".into(),
            news_language: "en".into(),
            keywords: vec!["Tesla".into(), "Elon Musk".into()],
            removed_marker: "[Removed]".into(),
            threshold: dec!(5),
            max_alerts: 3,
            send_delay: Duration::from_secs(5),
        }
    }
}
