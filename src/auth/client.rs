use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::types::UpstreamConfig;
use crate::error::GatewayError;
use crate::upstream::Envelope;

/// One-shot exchange of the static API-key credentials for a short-lived
/// bearer token. No retry here; the caller decides when to try again.
pub struct AuthClient {
    http: Client,
    token_url: String,
    api_key: String,
    api_key_id: String,
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    api_key: &'a str,
    api_key_id: &'a str,
}

/// `data` payload of a successful token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenData {
    pub access_token: String,
    pub expires_in: i64,
    pub organization_id: Option<String>,
}

impl AuthClient {
    pub fn new(http: Client, config: &UpstreamConfig) -> Self {
        Self {
            http,
            token_url: format!("{}{}", config.base_url, config.endpoints.auth_token),
            api_key: config.credentials.api_key.clone(),
            api_key_id: config.credentials.api_key_id.clone(),
        }
    }

    /// Fetch a fresh bearer token. Every failure branch collapses into
    /// `GatewayError::Authentication` — callers only learn that
    /// authentication did not succeed.
    pub async fn fetch_auth_token(&self) -> Result<TokenData, GatewayError> {
        debug!("fetching new authentication token from {}", self.token_url);

        let request = TokenRequest {
            api_key: &self.api_key,
            api_key_id: &self.api_key_id,
        };

        let response = self
            .http
            .post(&self.token_url)
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!("failed to reach token endpoint: {err}");
                GatewayError::Authentication(format!("no response from token endpoint: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("token endpoint returned {status}: {body}");
            return Err(GatewayError::Authentication(format!(
                "authentication failed with status {status}"
            )));
        }

        let envelope: Envelope<TokenData> = response.json().await.map_err(|err| {
            GatewayError::Authentication(format!("failed to decode token response: {err}"))
        })?;

        if !envelope.is_success() {
            return Err(GatewayError::Authentication(format!(
                "upstream returned status '{}'",
                envelope.status
            )));
        }

        let data = envelope.data.ok_or_else(|| {
            GatewayError::Authentication("no access token in response".to_string())
        })?;
        if data.access_token.is_empty() {
            return Err(GatewayError::Authentication(
                "no access token in response".to_string(),
            ));
        }

        info!(
            "received token response, expires_in: {}s, organization: {:?}",
            data.expires_in, data.organization_id
        );
        Ok(data)
    }
}
