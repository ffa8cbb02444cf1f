use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::Instant;
use tracing::error;

use crate::auth::provider::TokenProvider;
use crate::config::types::UpstreamConfig;
use crate::error::GatewayError;
use crate::observability::metrics::get_metrics;

/// Standard upstream response envelope: `{status, data, metadata}` where
/// `status == "success"` (case-insensitive) signals success.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    pub metadata: Option<ResponseMetadata>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseMetadata {
    pub timestamp: Option<String>,
    pub request_id: Option<String>,
    pub api_version: Option<String>,
}

/// Build the single outbound HTTP client shared by the auth exchange and
/// every resource call, with bounded connect/request timeouts.
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .context("failed to build upstream HTTP client")
}

/// Substitute `{placeholder}` segments in a configured endpoint template.
pub fn fill_path(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), value);
    }
    path
}

/// Authenticated GET access to the upstream API, shared by the resource
/// clients. Obtains the current bearer token per request; authentication
/// failures pass through untranslated so the outer layer can map them to
/// an unauthorized response.
#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    tokens: Arc<TokenProvider>,
    pub config: Arc<UpstreamConfig>,
}

impl UpstreamClient {
    pub fn new(http: Client, tokens: Arc<TokenProvider>, config: Arc<UpstreamConfig>) -> Self {
        Self {
            http,
            tokens,
            config,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        error_code: &'static str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>, GatewayError> {
        let metrics = get_metrics().await;
        metrics
            .upstream_requests
            .with_label_values(&[resource])
            .inc();

        let access_token = self.tokens.get_access_token().await?;
        let url = format!("{}{}", self.config.base_url, path);

        let start = Instant::now();
        let result = self
            .http
            .get(&url)
            .query(query)
            .bearer_auth(&access_token)
            .send()
            .await;
        metrics
            .upstream_request_duration
            .with_label_values(&[resource])
            .observe(start.elapsed().as_secs_f64());

        let response = result.map_err(|err| {
            metrics
                .upstream_failures
                .with_label_values(&[resource, "transport"])
                .inc();
            error!("upstream request to {url} failed: {err}");
            GatewayError::Upstream {
                code: error_code,
                message: format!("failed to reach upstream: {err}"),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            metrics
                .upstream_failures
                .with_label_values(&[resource, "status"])
                .inc();
            let body = response.text().await.unwrap_or_default();
            error!("upstream request to {url} returned {status}: {body}");
            return Err(GatewayError::Upstream {
                code: error_code,
                message: format!("upstream returned HTTP {status}"),
            });
        }

        response.json::<Envelope<T>>().await.map_err(|err| {
            metrics
                .upstream_failures
                .with_label_values(&[resource, "decode"])
                .inc();
            GatewayError::Upstream {
                code: error_code,
                message: format!("failed to decode upstream response: {err}"),
            }
        })
    }
}
