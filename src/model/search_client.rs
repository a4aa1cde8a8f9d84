//! Catalog search client: one GET, one JSON decode

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::SearchConfig;
use super::track::{SearchResponse, Track};

/// Everything that can go wrong during a fetch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("search query must not be empty")]
    InvalidQuery,

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("catalog responded with HTTP {0}")]
    HttpStatus(StatusCode),

    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidQuery => "invalid_query",
            FetchError::Network(_) => "network",
            FetchError::HttpStatus(_) => "http_status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Decode a raw search response body into tracks, keeping server order.
pub fn decode_response(body: &[u8]) -> Result<Vec<Track>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(body)?;
    Ok(response.into_tracks())
}

/// Search endpoint client. Cheap to clone; holds no response cache.
#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub async fn fetch(&self, query: &str) -> Result<Vec<Track>, FetchError> {
        if query.trim().is_empty() {
            return Err(FetchError::InvalidQuery);
        }

        let mut params = vec![
            ("term", query.to_string()),
            ("entity", self.config.entity.clone()),
        ];
        if let Some(limit) = self.config.limit {
            params.push(("limit", limit.to_string()));
        }

        tracing::debug!(query, endpoint = %self.config.endpoint, "Search request started");

        let response = self
            .http
            .get(self.config.endpoint.clone())
            .query(&params)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        tracing::trace!(bytes = body.len(), "Search response received");
        decode_response(&body)
    }
}
