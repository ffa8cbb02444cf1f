use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::error::GatewayError;
use crate::organizations::dto::Organization;
use crate::server::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/orgs", get(get_organizations))
}

async fn get_organizations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Organization>>, GatewayError> {
    info!("received request to get organizations");

    let organizations: Vec<Organization> = state
        .organizations
        .fetch_organizations()
        .await?
        .into_iter()
        .map(Organization::from)
        .collect();

    info!("retrieved {} organizations", organizations.len());
    Ok(Json(organizations))
}
