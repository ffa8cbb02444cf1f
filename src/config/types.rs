use serde::Deserialize;

/// ================================
/// Full gateway configuration
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct GatewayConfig {
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// ================================
/// Upstream partner API
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub token: TokenConfig,
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Upstream endpoint paths. Placeholders `{orgId}`, `{dataPoolId}` and
/// `{serviceLineId}` are substituted per request.
#[derive(Debug, Deserialize, Clone)]
pub struct EndpointsConfig {
    #[serde(default = "default_auth_token")]
    pub auth_token: String,
    #[serde(default = "default_organizations")]
    pub organizations: String,
    #[serde(default = "default_data_pools")]
    pub data_pools: String,
    #[serde(default = "default_data_pool_by_id")]
    pub data_pool_by_id: String,
    #[serde(default = "default_data_pool_usage")]
    pub data_pool_usage: String,
    #[serde(default = "default_data_pool_settings")]
    pub data_pool_settings: String,
    #[serde(default = "default_service_lines")]
    pub service_lines: String,
    #[serde(default = "default_service_line_by_id")]
    pub service_line_by_id: String,
    #[serde(default = "default_service_line_usage")]
    pub service_line_usage: String,
    #[serde(default = "default_service_line_settings")]
    pub service_line_settings: String,
    #[serde(default = "default_all_service_lines_usage")]
    pub all_service_lines_usage: String,
    #[serde(default = "default_all_service_lines_settings")]
    pub all_service_lines_settings: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            auth_token: default_auth_token(),
            organizations: default_organizations(),
            data_pools: default_data_pools(),
            data_pool_by_id: default_data_pool_by_id(),
            data_pool_usage: default_data_pool_usage(),
            data_pool_settings: default_data_pool_settings(),
            service_lines: default_service_lines(),
            service_line_by_id: default_service_line_by_id(),
            service_line_usage: default_service_line_usage(),
            service_line_settings: default_service_line_settings(),
            all_service_lines_usage: default_all_service_lines_usage(),
            all_service_lines_settings: default_all_service_lines_settings(),
        }
    }
}

/// Static long-lived credentials exchanged for short-lived bearer tokens.
#[derive(Debug, Deserialize, Clone)]
pub struct CredentialsConfig {
    pub api_key_id: String,
    pub api_key: String,
}

/// Bearer token lifecycle tuning.
#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    /// Scheduler check interval in milliseconds.
    #[serde(default = "default_refresh_rate_ms")]
    pub refresh_rate_ms: u64,
    /// Percentage of token lifetime after which it is refreshed proactively.
    /// invariant: 0..=100
    #[serde(default = "default_expiry_threshold_percent")]
    pub expiry_threshold_percent: i32,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate_ms(),
            expiry_threshold_percent: default_expiry_threshold_percent(),
        }
    }
}

/// ================================
/// Gateway HTTP server
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_path")]
    pub path: String,
    #[serde(default)]
    pub is_enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            path: default_metrics_path(),
            is_enabled: false,
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Compact,
}

fn default_auth_token() -> String {
    "/auth/token".to_string()
}

fn default_organizations() -> String {
    "/v1/organizations".to_string()
}

fn default_data_pools() -> String {
    "/v1/organizations/{orgId}/data-pools".to_string()
}

fn default_data_pool_by_id() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}".to_string()
}

fn default_data_pool_usage() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/data-usage".to_string()
}

fn default_data_pool_settings() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/settings".to_string()
}

fn default_service_lines() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines".to_string()
}

fn default_service_line_by_id() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines/{serviceLineId}".to_string()
}

fn default_service_line_usage() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines/{serviceLineId}/data-usage"
        .to_string()
}

fn default_service_line_settings() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines/{serviceLineId}/settings"
        .to_string()
}

fn default_all_service_lines_usage() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines/data-usage".to_string()
}

fn default_all_service_lines_settings() -> String {
    "/v1/organizations/{orgId}/data-pools/{dataPoolId}/service-lines/settings".to_string()
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_refresh_rate_ms() -> u64 {
    60_000
}

fn default_expiry_threshold_percent() -> i32 {
    80
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}
