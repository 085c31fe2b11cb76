//! News search port.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::Article;
use crate::error::Result;

/// Search over published news articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Articles matching `query` published on or after `from`.
    ///
    /// Returns every article the provider sends back; relevance filtering
    /// happens in the caller.
    async fn search(&self, query: &str, from: NaiveDate) -> Result<Vec<Article>>;
}
