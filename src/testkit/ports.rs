//! In-memory port implementations.
//!
//! Each fake records how it was called so tests can assert on what the job
//! did as well as on the outcome it returned.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Article, ClosingPrices};
use crate::error::{Error, Result};
use crate::port::{NewsSource, SmsReceipt, SmsSender, StockQuotes};

/// Quote source returning a fixed answer.
#[derive(Clone)]
pub struct StaticQuotes {
    answer: std::result::Result<ClosingPrices, String>,
    calls: Arc<AtomicUsize>,
}

impl StaticQuotes {
    #[must_use]
    pub fn returning(closes: ClosingPrices) -> Self {
        Self {
            answer: Ok(closes),
            calls: Arc::default(),
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            calls: Arc::default(),
        }
    }

    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockQuotes for StaticQuotes {
    fn name(&self) -> &'static str {
        "static-quotes"
    }

    async fn daily_closes(&self, _symbol: &str) -> Result<ClosingPrices> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
            .clone()
            .map_err(|message| Error::api("static-quotes", message))
    }
}

/// News source returning a fixed article list.
#[derive(Clone)]
pub struct StaticNews {
    answer: std::result::Result<Vec<Article>, String>,
    searches: Arc<Mutex<Vec<(String, NaiveDate)>>>,
}

impl StaticNews {
    #[must_use]
    pub fn returning(articles: Vec<Article>) -> Self {
        Self {
            answer: Ok(articles),
            searches: Arc::default(),
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(message.to_string()),
            searches: Arc::default(),
        }
    }

    /// `(query, from)` of every search made.
    #[must_use]
    pub fn searches(&self) -> Vec<(String, NaiveDate)> {
        self.searches.lock().expect("lock searches").clone()
    }
}

#[async_trait]
impl NewsSource for StaticNews {
    fn name(&self) -> &'static str {
        "static-news"
    }

    async fn search(&self, query: &str, from: NaiveDate) -> Result<Vec<Article>> {
        self.searches
            .lock()
            .expect("lock searches")
            .push((query.to_string(), from));
        self.answer
            .clone()
            .map_err(|message| Error::api("static-news", message))
    }
}

/// SMS sender that records every body it is asked to send.
///
/// Attempts whose zero-based index is in the failure set return an error
/// instead of a receipt; they are still recorded.
#[derive(Clone, Default)]
pub struct RecordingSms {
    sent: Arc<Mutex<Vec<String>>>,
    fail_on: HashSet<usize>,
}

impl RecordingSms {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the attempts at the given zero-based positions.
    #[must_use]
    pub fn failing_on(attempts: impl IntoIterator<Item = usize>) -> Self {
        Self {
            sent: Arc::default(),
            fail_on: attempts.into_iter().collect(),
        }
    }

    /// Every body passed to `send`, in order.
    #[must_use]
    pub fn bodies(&self) -> Vec<String> {
        self.sent.lock().expect("lock sent messages").clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock sent messages").len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SmsSender for RecordingSms {
    fn name(&self) -> &'static str {
        "recording-sms"
    }

    async fn send(&self, body: &str) -> Result<SmsReceipt> {
        let attempt = {
            let mut sent = self.sent.lock().expect("lock sent messages");
            sent.push(body.to_string());
            sent.len() - 1
        };

        if self.fail_on.contains(&attempt) {
            return Err(Error::api("recording-sms", format!("attempt {attempt} rejected")));
        }

        Ok(SmsReceipt {
            id: format!("SM{attempt:032}"),
            status: "queued".to_string(),
        })
    }
}
