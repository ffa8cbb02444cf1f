use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::datapools::dto::{DataPool, DataPoolSettings, DataPoolUsage};
use crate::error::GatewayError;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/organizations/{orgId}/data-pools", get(get_data_pools))
        .route(
            "/api/organizations/{orgId}/data-pools/{dataPoolId}",
            get(get_data_pool_by_id),
        )
        .route(
            "/api/organizations/{orgId}/data-pools/{dataPoolId}/data-usage",
            get(get_data_pool_usage),
        )
        .route(
            "/api/organizations/{orgId}/data-pools/{dataPoolId}/settings",
            get(get_data_pool_settings),
        )
}

/// `?billingCycles=N` usage window, defaulting to the current cycle.
#[derive(Debug, Deserialize)]
pub struct BillingCyclesQuery {
    #[serde(rename = "billingCycles", default = "default_billing_cycles")]
    pub billing_cycles: u32,
}

fn default_billing_cycles() -> u32 {
    1
}

async fn get_data_pools(
    State(state): State<AppState>,
    Path(org_id): Path<String>,
) -> Result<Json<Vec<DataPool>>, GatewayError> {
    info!("received request to get data pools for organization: {org_id}");

    let data_pools: Vec<DataPool> = state
        .data_pools
        .fetch_data_pools(&org_id)
        .await?
        .into_iter()
        .map(DataPool::from)
        .collect();

    info!("retrieved {} data pools", data_pools.len());
    Ok(Json(data_pools))
}

async fn get_data_pool_by_id(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
) -> Result<Json<DataPool>, GatewayError> {
    info!("received request to get data pool: {data_pool_id} for organization: {org_id}");

    let external = state
        .data_pools
        .fetch_data_pool_by_id(&org_id, &data_pool_id)
        .await?;
    Ok(Json(DataPool::from(external)))
}

async fn get_data_pool_usage(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
    Query(query): Query<BillingCyclesQuery>,
) -> Result<Json<DataPoolUsage>, GatewayError> {
    info!(
        "received request to get data usage for data pool: {data_pool_id} with {} billing cycles",
        query.billing_cycles
    );

    let usage = state
        .data_pools
        .fetch_data_pool_usage(&org_id, &data_pool_id, query.billing_cycles)
        .await?;
    Ok(Json(usage))
}

async fn get_data_pool_settings(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
) -> Result<Json<DataPoolSettings>, GatewayError> {
    info!("received request to get settings for data pool: {data_pool_id}");

    let settings = state
        .data_pools
        .fetch_data_pool_settings(&org_id, &data_pool_id)
        .await?;
    Ok(Json(settings))
}
