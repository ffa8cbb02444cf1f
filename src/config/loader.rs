use crate::config::types::GatewayConfig;
use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

/// Load and validate config from YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GatewayConfig> {
    let raw = fs::read_to_string(path)?;
    parse_config(&raw)
}

pub fn parse_config(raw: &str) -> Result<GatewayConfig> {
    let config: GatewayConfig = serde_yaml::from_str(raw)?;

    if config.upstream.base_url.is_empty() {
        bail!("upstream.base_url must not be empty");
    }
    if config.upstream.credentials.api_key.is_empty()
        || config.upstream.credentials.api_key_id.is_empty()
    {
        bail!("upstream.credentials.api_key and api_key_id must not be empty");
    }

    let token = &config.upstream.token;
    if !(0..=100).contains(&token.expiry_threshold_percent) {
        bail!(
            "upstream.token.expiry_threshold_percent must be between 0 and 100, got {}",
            token.expiry_threshold_percent
        );
    }
    if token.refresh_rate_ms == 0 {
        bail!("upstream.token.refresh_rate_ms must be greater than zero");
    }

    Ok(config)
}
