use tracing::{debug, info};

use crate::datapools::dto::{DataPoolSettings, DataPoolUsage, ExternalDataPool};
use crate::error::GatewayError;
use crate::upstream::{fill_path, Envelope, UpstreamClient};

const RESOURCE: &str = "data-pools";
const FETCH_ERROR: &str = "DATAPOOL_FETCH_ERROR";
const USAGE_ERROR: &str = "DATAPOOL_USAGE_ERROR";
const SETTINGS_ERROR: &str = "DATAPOOL_SETTINGS_ERROR";

/// Read access to the upstream data-pool resources of an organization.
#[derive(Clone)]
pub struct DataPoolClient {
    upstream: UpstreamClient,
}

impl DataPoolClient {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    pub async fn fetch_data_pools(
        &self,
        org_id: &str,
    ) -> Result<Vec<ExternalDataPool>, GatewayError> {
        debug!("fetching data pools for organization {org_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.data_pools,
            &[("orgId", org_id)],
        );
        let envelope: Envelope<Vec<ExternalDataPool>> = self
            .upstream
            .get_json(RESOURCE, FETCH_ERROR, &path, &[])
            .await?;

        if !envelope.is_success() {
            return Err(GatewayError::Upstream {
                code: FETCH_ERROR,
                message: format!("upstream returned status '{}'", envelope.status),
            });
        }

        let pools = envelope.data.unwrap_or_default();
        info!("fetched {} data pools for organization {org_id}", pools.len());
        Ok(pools)
    }

    pub async fn fetch_data_pool_by_id(
        &self,
        org_id: &str,
        data_pool_id: &str,
    ) -> Result<ExternalDataPool, GatewayError> {
        debug!("fetching data pool {data_pool_id} for organization {org_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.data_pool_by_id,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let envelope: Envelope<ExternalDataPool> = self
            .upstream
            .get_json(RESOURCE, FETCH_ERROR, &path, &[])
            .await?;

        if !envelope.is_success() {
            return Err(GatewayError::Upstream {
                code: FETCH_ERROR,
                message: format!("upstream returned status '{}'", envelope.status),
            });
        }

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: FETCH_ERROR,
            message: format!("no data pool '{data_pool_id}' in upstream response"),
        })
    }

    pub async fn fetch_data_pool_usage(
        &self,
        org_id: &str,
        data_pool_id: &str,
        billing_cycles: u32,
    ) -> Result<DataPoolUsage, GatewayError> {
        debug!("fetching data usage for data pool {data_pool_id}, {billing_cycles} billing cycles");

        let path = fill_path(
            &self.upstream.config.endpoints.data_pool_usage,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let query = [("billingCycles", billing_cycles.to_string())];
        let envelope: Envelope<DataPoolUsage> = self
            .upstream
            .get_json(RESOURCE, USAGE_ERROR, &path, &query)
            .await?;

        if !envelope.is_success() {
            return Err(GatewayError::Upstream {
                code: USAGE_ERROR,
                message: format!("upstream returned status '{}'", envelope.status),
            });
        }

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: USAGE_ERROR,
            message: format!("no usage data for data pool '{data_pool_id}' in upstream response"),
        })
    }

    pub async fn fetch_data_pool_settings(
        &self,
        org_id: &str,
        data_pool_id: &str,
    ) -> Result<DataPoolSettings, GatewayError> {
        debug!("fetching settings for data pool {data_pool_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.data_pool_settings,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let envelope: Envelope<DataPoolSettings> = self
            .upstream
            .get_json(RESOURCE, SETTINGS_ERROR, &path, &[])
            .await?;

        if !envelope.is_success() {
            return Err(GatewayError::Upstream {
                code: SETTINGS_ERROR,
                message: format!("upstream returned status '{}'", envelope.status),
            });
        }

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: SETTINGS_ERROR,
            message: format!("no settings for data pool '{data_pool_id}' in upstream response"),
        })
    }
}
