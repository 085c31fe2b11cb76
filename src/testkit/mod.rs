//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`ports`]: In-memory fakes for [`StockQuotes`](crate::port::StockQuotes),
//!   [`NewsSource`](crate::port::NewsSource) and [`SmsSender`](crate::port::SmsSender).
//! - [`domain`]: Builders for closing prices and articles.
//! - [`config`]: A watch configuration with no send delay.

pub mod config;
pub mod domain;
pub mod ports;
