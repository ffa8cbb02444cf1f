use tracing::{debug, info};

use crate::error::GatewayError;
use crate::organizations::dto::ExternalOrganization;
use crate::upstream::{Envelope, UpstreamClient};

const RESOURCE: &str = "organizations";
const FETCH_ERROR: &str = "ORG_FETCH_ERROR";

/// Read access to the upstream organization resource.
#[derive(Clone)]
pub struct OrganizationClient {
    upstream: UpstreamClient,
}

impl OrganizationClient {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self { upstream }
    }

    /// The upstream returns the single organization the API key belongs
    /// to; it is wrapped into a list here.
    pub async fn fetch_organizations(&self) -> Result<Vec<ExternalOrganization>, GatewayError> {
        debug!("fetching organizations from upstream");

        let path = self.upstream.config.endpoints.organizations.clone();
        let envelope: Envelope<ExternalOrganization> = self
            .upstream
            .get_json(RESOURCE, FETCH_ERROR, &path, &[])
            .await?;

        if !envelope.is_success() {
            return Err(GatewayError::Upstream {
                code: FETCH_ERROR,
                message: format!("upstream returned status '{}'", envelope.status),
            });
        }

        let Some(organization) = envelope.data else {
            info!("no organization data in response");
            return Ok(Vec::new());
        };

        info!("fetched organization: {:?}", organization.name);
        Ok(vec![organization])
    }
}
