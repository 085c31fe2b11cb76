//! Stock quote port.

use async_trait::async_trait;

use crate::domain::ClosingPrices;
use crate::error::Result;

/// Source of daily closing prices.
#[async_trait]
pub trait StockQuotes: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetch the two most recent daily closes for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the provider reports an error,
    /// or fewer than two trading days are available.
    async fn daily_closes(&self, symbol: &str) -> Result<ClosingPrices>;
}
