//! Stockwatch - text alerts for sharp daily stock moves.
//!
//! One run fetches the two most recent daily closes for a single security,
//! measures the move against the average of the two, and when it reaches the
//! threshold searches the news and texts up to three relevant headlines.
//!
//! # Modules
//!
//! - [`domain`] - Price movement, news relevance and message text
//! - [`port`] - Traits for the quote, news and SMS services
//! - [`adapter`] - `reqwest` clients for Alpha Vantage, NewsAPI and Twilio
//! - [`application`] - The [`AlertJob`](application::AlertJob) run
//! - [`infrastructure`] - Environment configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - In-memory port fakes for integration tests
//!
//! # Example
//!
//! ```no_run
//! use stockwatch::infrastructure::bootstrap::build_alert_job;
//! use stockwatch::infrastructure::config::settings::Config;
//!
//! # async fn run() -> stockwatch::error::Result<()> {
//! let config = Config::from_env()?;
//! let outcome = build_alert_job(&config).run().await;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
