//! The alert run: fetch prices, decide, fetch news, text.
//!
//! Every external failure is logged here and turned into a quieter outcome
//! rather than propagated, so one run always finishes with a [`RunOutcome`].

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info};

use crate::domain::{compose_alert, Article, PriceMove, RelevanceFilter};
use crate::infrastructure::config::watch::WatchConfig;
use crate::port::{NewsSource, SmsSender, StockQuotes};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Prices could not be fetched; nothing else was attempted.
    StockUnavailable,
    /// The move was under the threshold; news was not fetched.
    BelowThreshold(PriceMove),
    /// The move qualified but no relevant article was found.
    NoRelevantNews(PriceMove),
    /// Messages were attempted.
    Alerted {
        movement: PriceMove,
        attempted: usize,
        delivered: usize,
    },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StockUnavailable => write!(f, "stock data unavailable"),
            Self::BelowThreshold(m) => write!(f, "{m}, below threshold"),
            Self::NoRelevantNews(m) => write!(f, "{m}, no relevant news"),
            Self::Alerted {
                movement,
                attempted,
                delivered,
            } => write!(f, "{movement}, {delivered}/{attempted} messages sent"),
        }
    }
}

/// One pass of the price alert.
pub struct AlertJob {
    watch: WatchConfig,
    filter: RelevanceFilter,
    quotes: Arc<dyn StockQuotes>,
    news: Arc<dyn NewsSource>,
    sms: Arc<dyn SmsSender>,
}

impl AlertJob {
    #[must_use]
    pub fn new(
        watch: WatchConfig,
        quotes: Arc<dyn StockQuotes>,
        news: Arc<dyn NewsSource>,
        sms: Arc<dyn SmsSender>,
    ) -> Self {
        let filter = watch.relevance_filter();
        Self {
            watch,
            filter,
            quotes,
            news,
            sms,
        }
    }

    /// Run the job once.
    pub async fn run(&self) -> RunOutcome {
        let symbol = self.watch.symbol.as_str();

        let closes = match self.quotes.daily_closes(symbol).await {
            Ok(closes) => closes,
            Err(e) => {
                error!(
                    provider = self.quotes.name(),
                    symbol = %symbol,
                    error = %e,
                    "Stock data could not be fetched"
                );
                return RunOutcome::StockUnavailable;
            }
        };

        let movement = closes.movement();
        info!(
            symbol = %symbol,
            date = %closes.date(),
            latest = %closes.latest(),
            previous = %closes.previous(),
            direction = %movement.direction,
            percentage = %movement.percentage,
            "Computed daily move"
        );

        if !movement.reaches(self.watch.threshold) {
            info!(threshold = %self.watch.threshold, "Move below alert threshold");
            return RunOutcome::BelowThreshold(movement);
        }

        let articles = self.relevant_news(closes.date()).await;
        if articles.is_empty() {
            info!("No relevant news found");
            return RunOutcome::NoRelevantNews(movement);
        }

        let (attempted, delivered) = self.dispatch(&movement, &articles).await;
        RunOutcome::Alerted {
            movement,
            attempted,
            delivered,
        }
    }

    async fn relevant_news(&self, from: NaiveDate) -> Vec<Article> {
        match self.news.search(&self.watch.news_query, from).await {
            Ok(articles) => {
                let total = articles.len();
                let relevant = self.filter.retain(articles);
                info!(total, relevant = relevant.len(), "Fetched news");
                relevant
            }
            Err(e) => {
                error!(
                    provider = self.news.name(),
                    error = %e,
                    "An error occurred while fetching news"
                );
                Vec::new()
            }
        }
    }

    /// Send one message per article, up to the configured limit, pausing
    /// after each attempt. Returns `(attempted, delivered)`.
    async fn dispatch(&self, movement: &PriceMove, articles: &[Article]) -> (usize, usize) {
        let mut attempted = 0;
        let mut delivered = 0;

        for article in articles.iter().take(self.watch.max_alerts) {
            let body = compose_alert(&self.watch.company, movement, article);
            attempted += 1;

            match self.sms.send(&body).await {
                Ok(receipt) => {
                    delivered += 1;
                    info!(id = %receipt.id, status = %receipt.status, "Message sent");
                }
                Err(e) => {
                    error!(provider = self.sms.name(), error = %e, "Failed to send SMS");
                }
            }

            tokio::time::sleep(self.watch.send_delay).await;
        }

        (attempted, delivered)
    }
}
