use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Data pool as the upstream API returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDataPool {
    pub id: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub plan_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "dataAvailableGB")]
    pub data_available_gb: Option<f32>,
    #[serde(rename = "dataUsedGB")]
    pub data_used_gb: Option<f32>,
    pub total_service_lines: Option<i32>,
}

/// Simplified data pool exposed by the gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPool {
    pub id: String,
    pub name: Option<String>,
    pub country: Option<String>,
    pub plan_type: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "dataAvailableGB")]
    pub data_available_gb: Option<f32>,
    #[serde(rename = "dataUsedGB")]
    pub data_used_gb: Option<f32>,
    pub total_service_lines: Option<i32>,
}

impl From<ExternalDataPool> for DataPool {
    fn from(external: ExternalDataPool) -> Self {
        Self {
            id: external.id,
            name: external.name,
            country: external.country,
            plan_type: external.plan_type,
            status: external.status,
            start_date: external.start_date,
            end_date: external.end_date,
            data_available_gb: external.data_available_gb,
            data_used_gb: external.data_used_gb,
            total_service_lines: external.total_service_lines,
        }
    }
}

/// Data usage report for a pool, passed through from upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoolUsage {
    pub billing_cycles: Option<Vec<BillingCycleUsage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycleUsage {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "totalBillingCycleUsageGB")]
    pub total_billing_cycle_usage_gb: Option<f32>,
    pub daily_data_usage: Option<Vec<DailyUsage>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyUsage {
    pub date: Option<NaiveDate>,
    #[serde(rename = "dataUsageGB")]
    pub data_usage_gb: Option<f32>,
}

/// Alert/limit configuration of a pool, passed through from upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoolSettings {
    pub settings: Option<Vec<Setting>>,
    pub notifications: Option<Vec<Notification>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    /// ALERT or LIMIT
    #[serde(rename = "type")]
    pub setting_type: Option<String>,
    /// DAY, WEEK, MONTH, ALL
    pub period: Option<String>,
    /// GB, TB, PB, PERCENT
    pub unit: Option<String>,
    pub value: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// EMAIL or GROUP
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
    pub value: Option<String>,
}
