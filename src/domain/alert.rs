//! SMS body for a price alert.

use super::news::Article;
use super::price::PriceMove;

/// Build the text message for one article.
///
/// Layout: `"{company} stocks {direction} by {percentage}%\n{title}\n{description}."`.
/// A missing description leaves that line empty.
#[must_use]
pub fn compose_alert(company: &str, movement: &PriceMove, article: &Article) -> String {
    format!(
        "{company} stocks {movement}\n{}\n{}.",
        article.title,
        article.description.as_deref().unwrap_or_default()
    )
}
