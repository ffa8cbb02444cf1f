use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datapools::dto::{BillingCycleUsage, Notification, Setting};

/// Service line as the upstream API returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServiceLine {
    pub id: String,
    pub service_line_name: Option<String>,
    pub service_line_number: Option<String>,
    pub status: Option<String>,
    pub activation_date: Option<NaiveDate>,
    pub kit_numbers: Option<Vec<String>>,
}

/// Simplified service line exposed by the gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub id: String,
    pub service_line_name: Option<String>,
    pub service_line_number: Option<String>,
    pub status: Option<String>,
    pub activation_date: Option<NaiveDate>,
    pub kit_numbers: Option<Vec<String>>,
}

impl From<ExternalServiceLine> for ServiceLine {
    fn from(external: ExternalServiceLine) -> Self {
        Self {
            id: external.id,
            service_line_name: external.service_line_name,
            service_line_number: external.service_line_number,
            status: external.status,
            activation_date: external.activation_date,
            kit_numbers: external.kit_numbers,
        }
    }
}

/// Usage report for a single service line, passed through from upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLineUsage {
    pub service_line_name: Option<String>,
    pub service_line_number: Option<String>,
    pub status: Option<String>,
    pub activation_date: Option<NaiveDate>,
    pub kit_numbers: Option<Vec<String>>,
    pub billing_cycles: Option<Vec<BillingCycleUsage>>,
}

/// Usage report covering every service line of a data pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLinesUsage {
    pub id: Option<String>,
    pub service_lines: Option<Vec<ServiceLineListUsage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLineListUsage {
    pub service_line_id: Option<String>,
    pub service_line_name: Option<String>,
    pub service_line_number: Option<String>,
    pub status: Option<String>,
    pub activation_date: Option<NaiveDate>,
    pub kit_numbers: Option<Vec<String>>,
    pub billing_cycles: Option<Vec<BillingCycleUsage>>,
}

/// Alert/limit configuration of a service line, passed through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLineSettings {
    pub service_line_id: Option<String>,
    pub settings: Option<Vec<Setting>>,
    pub notifications: Option<Vec<Notification>>,
}
