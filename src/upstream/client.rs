//! Pooled client for the cat and joke APIs.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::metrics;

use super::types::{first_cat_url, JokePayload, Upstream};

/// HTTP client shared by every handler that calls out.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Cat image search endpoint.
    cat_api_url: String,
    /// Random joke endpoint.
    joke_api_url: String,
}

impl UpstreamClient {
    /// Build the client from config. No request timeout is set unless configured.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(config.http_pool_size)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30));

        if let Some(timeout) = config.upstream_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            cat_api_url: config.cat_api_url.clone(),
            joke_api_url: config.joke_api_url.clone(),
        })
    }

    /// Cat image search endpoint.
    pub fn cat_api_url(&self) -> &str {
        &self.cat_api_url
    }

    /// Random joke endpoint.
    pub fn joke_api_url(&self) -> &str {
        &self.joke_api_url
    }

    /// Fetch one cat image URL, falling back to the placeholder on an empty search.
    #[instrument(skip(self))]
    pub async fn fetch_cat_image(&self) -> Result<String, UpstreamError> {
        let images: Vec<Value> = self.get_json(Upstream::Cat, &self.cat_api_url).await?;
        if images.is_empty() {
            debug!("Cat search returned no images, using placeholder");
        }

        first_cat_url(&images).ok_or_else(|| {
            let err = UpstreamError::MissingField {
                upstream: Upstream::Cat,
                field: "url",
            };
            metrics::inc_upstream_failures(Upstream::Cat, err.kind());
            err
        })
    }

    /// Fetch one joke.
    #[instrument(skip(self))]
    pub async fn fetch_joke(&self) -> Result<JokePayload, UpstreamError> {
        self.get_json(Upstream::Joke, &self.joke_api_url).await
    }

    /// GET `url` and decode the body. Anything but 200 OK is a failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        upstream: Upstream,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let start = Instant::now();
        metrics::inc_upstream_requests(upstream);

        let result = self.send(upstream, url).await;

        metrics::record_upstream_latency(start, upstream);
        if let Err(e) = &result {
            metrics::inc_upstream_failures(upstream, e.kind());
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        upstream: Upstream,
        url: &str,
    ) -> Result<T, UpstreamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport { upstream, source })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%upstream, %status, "Upstream returned non-200 status");
            return Err(UpstreamError::Status { upstream, status });
        }

        response
            .json()
            .await
            .map_err(|source| UpstreamError::Decode { upstream, source })
    }
}
