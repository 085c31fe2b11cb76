//! Alpha Vantage daily time series client.
//!
//! Implements [`StockQuotes`] using the `TIME_SERIES_DAILY` function. The
//! service answers quota and key problems with HTTP 200 and a message field
//! instead of data, so those are checked before the series is read.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::domain::ClosingPrices;
use crate::error::{Error, Result};
use crate::port::outbound::quote::StockQuotes;

const SERVICE: &str = "alphavantage";

/// Alpha Vantage REST client.
#[derive(Debug)]
pub struct AlphaVantage {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantage {
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[derive(Deserialize)]
struct DailyResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<BTreeMap<NaiveDate, DailyBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Deserialize)]
struct DailyBar {
    #[serde(rename = "4. close")]
    close: Decimal,
}

impl DailyResponse {
    fn into_closes(self) -> Result<ClosingPrices> {
        if let Some(message) = self.error_message.or(self.note).or(self.information) {
            return Err(Error::api(SERVICE, message));
        }

        let series = self
            .time_series
            .ok_or_else(|| Error::Parse("response has no daily time series".into()))?;

        let mut newest_first = series.into_iter().rev();
        match (newest_first.next(), newest_first.next()) {
            (Some((date, latest)), Some((_, previous))) => {
                Ok(ClosingPrices::try_new(latest.close, previous.close, date)?)
            }
            _ => Err(Error::Parse(
                "need at least two trading days in the daily series".into(),
            )),
        }
    }
}

#[async_trait]
impl StockQuotes for AlphaVantage {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn daily_closes(&self, symbol: &str) -> Result<ClosingPrices> {
        debug!(symbol = %symbol, "Fetching daily time series");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("function", "TIME_SERIES_DAILY"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<DailyResponse>()
            .await?;

        response.into_closes()
    }
}
