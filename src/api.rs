use crate::error::Error;
use crate::models::{CreateRequest, CreatedLink, LinkStats};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// The two remote endpoints this client consumes. Behind a trait so the
/// synchronizer can be exercised against a mock service.
#[async_trait]
pub trait ShortenerApi: Send + Sync {
    /// Create a short link for `url`, optionally expiring at `expire_at`.
    async fn create(
        &self,
        url: &str,
        expire_at: Option<DateTime<Utc>>,
    ) -> Result<CreatedLink, Error>;

    /// Fetch the current click count and date metadata for `key`.
    async fn stats(&self, key: &str) -> Result<LinkStats, Error>;
}

// ── HTTP implementation ────────────────────────────────────────────────────

/// `ShortenerApi` over HTTP, talking to the real shortening service.
#[derive(Debug, Clone)]
pub struct HttpShortenerApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpShortenerApi {
    /// Build a client for the service at `base_url` (no trailing slash).
    /// Every request carries a strict `timeout` so a stalled service can
    /// never hang the caller.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl ShortenerApi for HttpShortenerApi {
    async fn create(
        &self,
        url: &str,
        expire_at: Option<DateTime<Utc>>,
    ) -> Result<CreatedLink, Error> {
        let endpoint = format!("{}/short", self.base_url);
        let body = CreateRequest {
            url,
            expiration_date: expire_at,
        };

        let response = self
            .client
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::CreateFailed(e.to_string()))?;

        response
            .json::<CreatedLink>()
            .await
            .map_err(|e| Error::CreateFailed(format!("decoding response: {e}")))
    }

    async fn stats(&self, key: &str) -> Result<LinkStats, Error> {
        let endpoint = format!("{}/short/{}/stats", self.base_url, key);

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::StatsFetchFailed {
                key: key.to_owned(),
                reason: e.to_string(),
            })?;

        response
            .json::<LinkStats>()
            .await
            .map_err(|e| Error::StatsFetchFailed {
                key: key.to_owned(),
                reason: format!("decoding response: {e}"),
            })
    }
}
