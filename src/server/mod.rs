use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::types::{GatewayConfig, MetricsConfig};
use crate::datapools::client::DataPoolClient;
use crate::observability::metrics::get_metrics;
use crate::observability::routes::MetricsState;
use crate::organizations::client::OrganizationClient;
use crate::servicelines::client::ServiceLineClient;
use crate::upstream::UpstreamClient;
use crate::{datapools, organizations, servicelines};

#[derive(Clone)]
pub struct AppState {
    pub organizations: OrganizationClient,
    pub data_pools: DataPoolClient,
    pub service_lines: ServiceLineClient,
    pub metrics_state: MetricsState,
}

impl AppState {
    pub async fn new(upstream: UpstreamClient) -> Self {
        let metrics = get_metrics().await;
        Self {
            organizations: OrganizationClient::new(upstream.clone()),
            data_pools: DataPoolClient::new(upstream.clone()),
            service_lines: ServiceLineClient::new(upstream),
            metrics_state: MetricsState::new(metrics.registry.clone()),
        }
    }
}

/// Assemble the full gateway router: the three resource verticals plus the
/// optional metrics endpoint.
pub fn build_router(state: AppState, metrics_config: &MetricsConfig) -> Router {
    Router::new()
        .merge(organizations::routes::router())
        .merge(datapools::routes::router())
        .merge(servicelines::routes::router())
        .merge(state.metrics_state.router(metrics_config))
        .with_state(state)
}

/// Bind and serve until a shutdown signal arrives.
pub async fn start(config: &GatewayConfig, state: AppState) -> Result<()> {
    let metrics = get_metrics().await;
    let app = build_router(state, &config.metrics);

    let listener =
        TcpListener::bind(format!("{}:{}", config.server.host, config.server.port)).await?;
    info!("gateway listening on {}", listener.local_addr()?);
    metrics.up.set(1);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
