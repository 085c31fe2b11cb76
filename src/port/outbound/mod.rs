//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod news;
pub mod quote;
pub mod sms;
