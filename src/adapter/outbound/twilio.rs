//! Twilio Programmable Messaging client.
//!
//! Sends through the REST `Messages` resource with HTTP basic auth
//! (account SID and auth token) and a form-encoded body.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::infrastructure::config::settings::TwilioConfig;
use crate::port::outbound::sms::{SmsReceipt, SmsSender};

const SERVICE: &str = "twilio";

/// REST API version segment.
const API_VERSION: &str = "2010-04-01";

/// Twilio SMS client bound to one sender and one recipient.
#[derive(Debug)]
pub struct Twilio {
    client: Client,
    base_url: String,
    config: TwilioConfig,
}

impl Twilio {
    #[must_use]
    pub fn new(base_url: impl Into<String>, config: TwilioConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            config,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/{API_VERSION}/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.config.account_sid
        )
    }
}

#[derive(Deserialize)]
struct MessageResponse {
    sid: String,
    status: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    code: Option<i64>,
    message: String,
}

impl ErrorResponse {
    fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("{} (code {code})", self.message),
            None => self.message.clone(),
        }
    }
}

#[async_trait]
impl SmsSender for Twilio {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn send(&self, body: &str) -> Result<SmsReceipt> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&[
                ("To", self.config.to.as_str()),
                ("From", self.config.from.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.describe())
                .unwrap_or_else(|_| format!("HTTP {status}"));
            return Err(Error::api(SERVICE, message));
        }

        let message: MessageResponse = serde_json::from_str(&text)?;
        Ok(SmsReceipt {
            id: message.sid,
            status: message.status,
        })
    }
}
