//! SMS delivery port.

use async_trait::async_trait;

use crate::error::Result;

/// What the provider reported for an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsReceipt {
    /// Provider-assigned message id.
    pub id: String,
    /// Delivery status at the time of acceptance (e.g. "queued").
    pub status: String,
}

/// Sends text messages.
///
/// Sender and recipient numbers are part of the implementation's
/// configuration; callers only supply the body.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Return the provider name for logging.
    fn name(&self) -> &'static str;

    /// Send one message.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider rejects the message or cannot be
    /// reached.
    async fn send(&self, body: &str) -> Result<SmsReceipt>;
}
