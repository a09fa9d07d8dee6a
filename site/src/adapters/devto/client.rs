//! DEV.to API client implementation

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use urlencoding::encode;

use crate::domain::entities::ArticleQuery;
use crate::domain::ports::{ArticleSource, SourceResponse};
use crate::error::FeedError;

/// Implementation of the article source over the DEV.to API
///
/// No client-side timeout is configured here; the feed loader bounds the
/// whole request and drops it on expiry.
#[derive(Clone)]
pub struct DevToClient {
    http: Client,
    base_url: String,
}

impl DevToClient {
    pub fn new(base_url: &str) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(default_user_agent())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn articles_url(&self, query: &ArticleQuery) -> String {
        format!(
            "{}/articles?username={}&per_page={}",
            self.base_url,
            encode(&query.username),
            query.per_page
        )
    }
}

#[async_trait]
impl ArticleSource for DevToClient {
    async fn fetch_articles(&self, query: &ArticleQuery) -> Result<SourceResponse, FeedError> {
        let url = self.articles_url(query);
        tracing::debug!(url = %url, "Fetching articles");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, bytes = body.len(), "Article response received");
        Ok(SourceResponse::new(status, body))
    }
}

fn default_user_agent() -> String {
    format!(
        "folio-site/{} (rust; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}
