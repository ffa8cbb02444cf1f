use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::datapools::routes::BillingCyclesQuery;
use crate::error::GatewayError;
use crate::servicelines::dto::{
    ServiceLine, ServiceLineSettings, ServiceLineUsage, ServiceLinesUsage,
};
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    let base = "/api/organizations/{orgId}/data-pools/{dataPoolId}/service-lines";
    Router::new()
        .route(base, get(get_service_lines))
        .route(
            &format!("{base}/data-usage"),
            get(get_all_service_lines_usage),
        )
        .route(
            &format!("{base}/settings"),
            get(get_all_service_lines_settings),
        )
        .route(&format!("{base}/{{serviceLineId}}"), get(get_service_line_by_id))
        .route(
            &format!("{base}/{{serviceLineId}}/data-usage"),
            get(get_service_line_usage),
        )
        .route(
            &format!("{base}/{{serviceLineId}}/settings"),
            get(get_service_line_settings),
        )
}

async fn get_service_lines(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
) -> Result<Json<Vec<ServiceLine>>, GatewayError> {
    info!("received request to get service lines for data pool: {data_pool_id}");

    let service_lines: Vec<ServiceLine> = state
        .service_lines
        .fetch_service_lines(&org_id, &data_pool_id)
        .await?
        .into_iter()
        .map(ServiceLine::from)
        .collect();

    info!("retrieved {} service lines", service_lines.len());
    Ok(Json(service_lines))
}

async fn get_service_line_by_id(
    State(state): State<AppState>,
    Path((org_id, data_pool_id, service_line_id)): Path<(String, String, String)>,
) -> Result<Json<ServiceLine>, GatewayError> {
    info!("received request to get service line: {service_line_id}");

    let external = state
        .service_lines
        .fetch_service_line_by_id(&org_id, &data_pool_id, &service_line_id)
        .await?;
    Ok(Json(ServiceLine::from(external)))
}

async fn get_service_line_usage(
    State(state): State<AppState>,
    Path((org_id, data_pool_id, service_line_id)): Path<(String, String, String)>,
    Query(query): Query<BillingCyclesQuery>,
) -> Result<Json<ServiceLineUsage>, GatewayError> {
    info!(
        "received request to get usage for service line: {service_line_id} with {} billing cycles",
        query.billing_cycles
    );

    let usage = state
        .service_lines
        .fetch_service_line_usage(&org_id, &data_pool_id, &service_line_id, query.billing_cycles)
        .await?;
    Ok(Json(usage))
}

async fn get_all_service_lines_usage(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
    Query(query): Query<BillingCyclesQuery>,
) -> Result<Json<ServiceLinesUsage>, GatewayError> {
    info!(
        "received request to get usage for all service lines with {} billing cycles",
        query.billing_cycles
    );

    let usage = state
        .service_lines
        .fetch_all_service_lines_usage(&org_id, &data_pool_id, query.billing_cycles)
        .await?;
    Ok(Json(usage))
}

async fn get_service_line_settings(
    State(state): State<AppState>,
    Path((org_id, data_pool_id, service_line_id)): Path<(String, String, String)>,
) -> Result<Json<ServiceLineSettings>, GatewayError> {
    info!("received request to get settings for service line: {service_line_id}");

    let settings = state
        .service_lines
        .fetch_service_line_settings(&org_id, &data_pool_id, &service_line_id)
        .await?;
    Ok(Json(settings))
}

async fn get_all_service_lines_settings(
    State(state): State<AppState>,
    Path((org_id, data_pool_id)): Path<(String, String)>,
) -> Result<Json<Vec<ServiceLineSettings>>, GatewayError> {
    info!("received request to get settings for all service lines in data pool: {data_pool_id}");

    let settings = state
        .service_lines
        .fetch_all_service_lines_settings(&org_id, &data_pool_id)
        .await?;
    Ok(Json(settings))
}
