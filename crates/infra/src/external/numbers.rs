//! Upstream number-list service client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Base address the number ids are appended to.
pub const DEFAULT_NUMBERS_BASE_URL: &str = "http://20.244.56.144/test/";

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("numbers not found in response")]
    MissingNumbers,
}

/// Source of the raw number list for a given id.
#[async_trait]
pub trait NumberSource: Send + Sync {
    async fn fetch(&self, number_id: &str) -> Result<Vec<i64>, UpstreamError>;
}

#[derive(Debug, Deserialize)]
struct UpstreamNumbersPayload {
    /// `None` only when the key is absent; `"numbers": null` is an empty list.
    #[serde(default, deserialize_with = "present_list")]
    numbers: Option<Vec<i64>>,
}

fn present_list<'de, D>(deserializer: D) -> Result<Option<Vec<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Some(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Decode an upstream body; the `numbers` key is mandatory.
pub fn decode_numbers_payload(body: &[u8]) -> Result<Vec<i64>, UpstreamError> {
    let payload: UpstreamNumbersPayload = serde_json::from_slice(body)?;
    payload.numbers.ok_or(UpstreamError::MissingNumbers)
}

/// `NumberSource` backed by `GET {base_url}{number_id}`.
#[derive(Debug, Clone)]
pub struct HttpNumberSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNumberSource {
    /// Build a source whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Plain concatenation; the id is not escaped.
    pub fn url_for(&self, number_id: &str) -> String {
        format!("{}{}", self.base_url, number_id)
    }
}

#[async_trait]
impl NumberSource for HttpNumberSource {
    async fn fetch(&self, number_id: &str) -> Result<Vec<i64>, UpstreamError> {
        let url = self.url_for(number_id);
        tracing::debug!(%url, "fetching numbers from upstream");

        // The status code is not checked; only the body decides.
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let numbers = decode_numbers_payload(&body)?;
        tracing::debug!(%url, %status, count = numbers.len(), "upstream numbers received");
        Ok(numbers)
    }
}
