//! NewsAPI `everything` search client.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::domain::Article;
use crate::error::{Error, Result};
use crate::port::outbound::news::NewsSource;

const SERVICE: &str = "newsapi";

/// NewsAPI REST client.
#[derive(Debug)]
pub struct NewsApi {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl NewsApi {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    articles: Vec<ArticleDto>,
    message: Option<String>,
}

#[derive(Deserialize)]
struct ArticleDto {
    title: Option<String>,
    description: Option<String>,
}

impl SearchResponse {
    fn into_articles(self) -> Result<Vec<Article>> {
        if self.status != "ok" {
            let message = self
                .message
                .unwrap_or_else(|| format!("status {}", self.status));
            return Err(Error::api(SERVICE, message));
        }

        Ok(self
            .articles
            .into_iter()
            .filter_map(|a| a.title.map(|title| Article::new(title, a.description)))
            .collect())
    }
}

#[async_trait]
impl NewsSource for NewsApi {
    fn name(&self) -> &'static str {
        SERVICE
    }

    async fn search(&self, query: &str, from: NaiveDate) -> Result<Vec<Article>> {
        let from = from.format("%Y-%m-%d").to_string();
        debug!(query = %query, from = %from, "Searching news");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("from", from.as_str()),
                ("language", self.language.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Error responses carry a JSON body with the reason; fall back to the
        // status line when they don't.
        match serde_json::from_str::<SearchResponse>(&body) {
            Ok(parsed) => parsed.into_articles(),
            Err(_) if !status.is_success() => Err(Error::api(SERVICE, format!("HTTP {status}"))),
            Err(e) => Err(e.into()),
        }
    }
}
