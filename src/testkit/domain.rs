//! Builders for domain primitives.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Article, ClosingPrices};

/// Trading date used by [`closes`].
#[must_use]
pub fn trading_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 5).expect("valid date")
}

/// Closing prices dated [`trading_day`].
///
/// # Panics
///
/// Panics if either price is not positive.
#[must_use]
pub fn closes(latest: Decimal, previous: Decimal) -> ClosingPrices {
    ClosingPrices::try_new(latest, previous, trading_day()).expect("positive test prices")
}

/// An article with a description derived from its title.
#[must_use]
pub fn article(title: &str) -> Article {
    Article::new(title, Some(format!("About: {title}")))
}
