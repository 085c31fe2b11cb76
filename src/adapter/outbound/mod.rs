//! Outbound adapters (driven side).
//!
//! One `reqwest` client per external service, each implementing the
//! matching port in [`crate::port::outbound`].

pub mod alpha_vantage;
pub mod news_api;
pub mod twilio;

pub use alpha_vantage::AlphaVantage;
pub use news_api::NewsApi;
pub use twilio::Twilio;
