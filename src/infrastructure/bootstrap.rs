//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::{AlphaVantage, NewsApi, Twilio};
use crate::application::alert::AlertJob;
use crate::infrastructure::config::settings::Config;
use crate::port::{NewsSource, SmsSender, StockQuotes};

/// Build the alert job with the production HTTP adapters.
#[must_use]
pub fn build_alert_job(config: &Config) -> AlertJob {
    let quotes: Arc<dyn StockQuotes> = Arc::new(AlphaVantage::new(
        config.endpoints.quote_url.clone(),
        config.api_keys.stock.clone(),
    ));
    let news: Arc<dyn NewsSource> = Arc::new(NewsApi::new(
        config.endpoints.news_url.clone(),
        config.api_keys.news.clone(),
        config.watch.news_language.clone(),
    ));
    let sms: Arc<dyn SmsSender> = Arc::new(Twilio::new(
        config.endpoints.sms_url.clone(),
        config.twilio.clone(),
    ));

    info!(
        symbol = %config.watch.symbol,
        quotes = quotes.name(),
        news = news.name(),
        sms = sms.name(),
        "Alert job wired"
    );

    AlertJob::new(config.watch.clone(), quotes, news, sms)
}
