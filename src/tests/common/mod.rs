// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{Duration, Utc};
use reqwest::Client;

use crate::auth::client::AuthClient;
use crate::auth::provider::TokenProvider;
use crate::auth::token::AccessToken;
use crate::config::types::{CredentialsConfig, EndpointsConfig, TokenConfig, UpstreamConfig};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

/// Token issued `issued_ago_secs` in the past with the given total lifetime.
pub fn token_issued_ago(value: &str, issued_ago_secs: i64, lifetime_secs: i64) -> AccessToken {
    let issued_at = Utc::now() - Duration::seconds(issued_ago_secs);
    AccessToken::new(
        value.to_string(),
        issued_at,
        issued_at + Duration::seconds(lifetime_secs),
    )
}

/// Upstream config pointing at a mock server, with default endpoint paths.
pub fn upstream_config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_string(),
        endpoints: EndpointsConfig::default(),
        credentials: CredentialsConfig {
            api_key_id: "test-key-id".to_string(),
            api_key: "test-key".to_string(),
        },
        token: TokenConfig::default(),
        connect_timeout_ms: 1000,
        request_timeout_ms: 2000,
    }
}

pub fn auth_client(base_url: &str) -> AuthClient {
    AuthClient::new(build_reqwest_client(), &upstream_config(base_url))
}

pub fn provider(base_url: &str, expiry_threshold_percent: i32) -> Arc<TokenProvider> {
    Arc::new(TokenProvider::new(
        auth_client(base_url),
        expiry_threshold_percent,
    ))
}

/// Successful token exchange envelope as the upstream returns it.
pub fn token_response_json(access_token: &str, expires_in: i64) -> serde_json::Value {
    json!({
        "status": "success",
        "data": {
            "access_token": access_token,
            "expires_in": expires_in,
            "organization_id": "org-1"
        },
        "metadata": {
            "timestamp": "2025-12-30T20:30:57.520806151Z",
            "request_id": "test-request-id",
            "api_version": "v1"
        }
    })
}
