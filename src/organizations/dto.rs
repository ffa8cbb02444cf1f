use serde::{Deserialize, Serialize};

/// Organization as the upstream API returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalOrganization {
    #[serde(rename = "organization_id")]
    pub id: String,
    #[serde(rename = "organization_name")]
    pub name: Option<String>,
    pub display_name: Option<String>,
}

/// Simplified organization exposed by the gateway.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    pub id: String,
    pub display_name: Option<String>,
}

impl From<ExternalOrganization> for Organization {
    fn from(external: ExternalOrganization) -> Self {
        Self {
            id: external.id,
            display_name: external.display_name,
        }
    }
}
