use tracing::{debug, info};

use crate::error::GatewayError;
use crate::servicelines::dto::{
    ExternalServiceLine, ServiceLineSettings, ServiceLineUsage, ServiceLinesUsage,
};
use crate::upstream::{fill_path, Envelope, UpstreamClient};

const RESOURCE: &str = "service-lines";
const FETCH_ERROR: &str = "SERVICELINE_FETCH_ERROR";
const USAGE_ERROR: &str = "SERVICELINE_USAGE_ERROR";
const SETTINGS_ERROR: &str = "SERVICELINE_SETTINGS_ERROR";

/// Read access to the upstream service-line resources of a data pool.
#[derive(Clone)]
pub struct ServiceLineClient {
    upstream: UpstreamClient,
}

impl ServiceLineClient {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    fn check_success<T>(
        envelope: &Envelope<T>,
        code: &'static str,
    ) -> Result<(), GatewayError> {
        if envelope.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Upstream {
                code,
                message: format!("upstream returned status '{}'", envelope.status),
            })
        }
    }

    pub async fn fetch_service_lines(
        &self,
        org_id: &str,
        data_pool_id: &str,
    ) -> Result<Vec<ExternalServiceLine>, GatewayError> {
        debug!("fetching service lines for data pool {data_pool_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.service_lines,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let envelope: Envelope<Vec<ExternalServiceLine>> = self
            .upstream
            .get_json(RESOURCE, FETCH_ERROR, &path, &[])
            .await?;
        Self::check_success(&envelope, FETCH_ERROR)?;

        let lines = envelope.data.unwrap_or_default();
        info!("fetched {} service lines for data pool {data_pool_id}", lines.len());
        Ok(lines)
    }

    pub async fn fetch_service_line_by_id(
        &self,
        org_id: &str,
        data_pool_id: &str,
        service_line_id: &str,
    ) -> Result<ExternalServiceLine, GatewayError> {
        debug!("fetching service line {service_line_id} for data pool {data_pool_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.service_line_by_id,
            &[
                ("orgId", org_id),
                ("dataPoolId", data_pool_id),
                ("serviceLineId", service_line_id),
            ],
        );
        let envelope: Envelope<ExternalServiceLine> = self
            .upstream
            .get_json(RESOURCE, FETCH_ERROR, &path, &[])
            .await?;
        Self::check_success(&envelope, FETCH_ERROR)?;

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: FETCH_ERROR,
            message: format!("no service line '{service_line_id}' in upstream response"),
        })
    }

    pub async fn fetch_service_line_usage(
        &self,
        org_id: &str,
        data_pool_id: &str,
        service_line_id: &str,
        billing_cycles: u32,
    ) -> Result<ServiceLineUsage, GatewayError> {
        debug!("fetching usage for service line {service_line_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.service_line_usage,
            &[
                ("orgId", org_id),
                ("dataPoolId", data_pool_id),
                ("serviceLineId", service_line_id),
            ],
        );
        let query = [("billingCycles", billing_cycles.to_string())];
        let envelope: Envelope<ServiceLineUsage> = self
            .upstream
            .get_json(RESOURCE, USAGE_ERROR, &path, &query)
            .await?;
        Self::check_success(&envelope, USAGE_ERROR)?;

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: USAGE_ERROR,
            message: format!("no usage data for service line '{service_line_id}' in upstream response"),
        })
    }

    pub async fn fetch_all_service_lines_usage(
        &self,
        org_id: &str,
        data_pool_id: &str,
        billing_cycles: u32,
    ) -> Result<ServiceLinesUsage, GatewayError> {
        debug!("fetching usage for all service lines in data pool {data_pool_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.all_service_lines_usage,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let query = [("billingCycles", billing_cycles.to_string())];
        let envelope: Envelope<ServiceLinesUsage> = self
            .upstream
            .get_json(RESOURCE, USAGE_ERROR, &path, &query)
            .await?;
        Self::check_success(&envelope, USAGE_ERROR)?;

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: USAGE_ERROR,
            message: format!("no usage data for data pool '{data_pool_id}' in upstream response"),
        })
    }

    pub async fn fetch_service_line_settings(
        &self,
        org_id: &str,
        data_pool_id: &str,
        service_line_id: &str,
    ) -> Result<ServiceLineSettings, GatewayError> {
        debug!("fetching settings for service line {service_line_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.service_line_settings,
            &[
                ("orgId", org_id),
                ("dataPoolId", data_pool_id),
                ("serviceLineId", service_line_id),
            ],
        );
        let envelope: Envelope<ServiceLineSettings> = self
            .upstream
            .get_json(RESOURCE, SETTINGS_ERROR, &path, &[])
            .await?;
        Self::check_success(&envelope, SETTINGS_ERROR)?;

        envelope.data.ok_or_else(|| GatewayError::Upstream {
            code: SETTINGS_ERROR,
            message: format!("no settings for service line '{service_line_id}' in upstream response"),
        })
    }

    pub async fn fetch_all_service_lines_settings(
        &self,
        org_id: &str,
        data_pool_id: &str,
    ) -> Result<Vec<ServiceLineSettings>, GatewayError> {
        debug!("fetching settings for all service lines in data pool {data_pool_id}");

        let path = fill_path(
            &self.upstream.config.endpoints.all_service_lines_settings,
            &[("orgId", org_id), ("dataPoolId", data_pool_id)],
        );
        let envelope: Envelope<Vec<ServiceLineSettings>> = self
            .upstream
            .get_json(RESOURCE, SETTINGS_ERROR, &path, &[])
            .await?;
        Self::check_success(&envelope, SETTINGS_ERROR)?;

        Ok(envelope.data.unwrap_or_default())
    }
}
