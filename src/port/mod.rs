//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! The job talks to three external services. Each is reached through a
//! trait here so the run can be exercised against in-memory fakes.
//!
//! - [`StockQuotes`] - daily closing prices
//! - [`NewsSource`] - article search
//! - [`SmsSender`] - text message delivery

pub mod outbound;

pub use outbound::news::NewsSource;
pub use outbound::quote::StockQuotes;
pub use outbound::sms::{SmsReceipt, SmsSender};
