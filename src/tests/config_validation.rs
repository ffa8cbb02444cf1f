#[cfg(test)]
mod test {
    use std::io::Write;

    use crate::config::loader::{load_config, parse_config};

    const MINIMAL: &str = r#"
upstream:
  base_url: "https://api.example.com"
  credentials:
    api_key_id: "kid-1"
    api_key: "secret-1"
"#;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = parse_config(MINIMAL).expect("minimal config is valid");

        assert_eq!(config.upstream.token.refresh_rate_ms, 60_000);
        assert_eq!(config.upstream.token.expiry_threshold_percent, 80);
        assert_eq!(config.upstream.endpoints.auth_token, "/auth/token");
        assert_eq!(
            config.upstream.endpoints.data_pool_by_id,
            "/v1/organizations/{orgId}/data-pools/{dataPoolId}"
        );
        assert_eq!(config.server.port, 8080);
        assert!(!config.metrics.is_enabled);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let raw = r#"
upstream:
  base_url: "https://api.example.com"
  credentials:
    api_key_id: "kid-1"
    api_key: "secret-1"
  token:
    refresh_rate_ms: 5000
    expiry_threshold_percent: 50
server:
  host: "127.0.0.1"
  port: 9000
metrics:
  is_enabled: true
logging:
  level: "debug"
  format: json
"#;
        let config = parse_config(raw).expect("valid config");
        assert_eq!(config.upstream.token.refresh_rate_ms, 5000);
        assert_eq!(config.upstream.token.expiry_threshold_percent, 50);
        assert_eq!(config.server.port, 9000);
        assert!(config.metrics.is_enabled);
        assert_eq!(config.logging.unwrap().level, "debug");
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let raw = r#"
upstream:
  base_url: "https://api.example.com"
  credentials:
    api_key_id: "kid-1"
    api_key: "secret-1"
  token:
    expiry_threshold_percent: 101
"#;
        assert!(parse_config(raw).is_err());
    }

    #[test]
    fn zero_refresh_rate_is_rejected() {
        let raw = r#"
upstream:
  base_url: "https://api.example.com"
  credentials:
    api_key_id: "kid-1"
    api_key: "secret-1"
  token:
    refresh_rate_ms: 0
"#;
        assert!(parse_config(raw).is_err());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let raw = r#"
upstream:
  base_url: "https://api.example.com"
  credentials:
    api_key_id: "kid-1"
    api_key: ""
"#;
        assert!(parse_config(raw).is_err());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let raw = r#"
upstream:
  base_url: ""
  credentials:
    api_key_id: "kid-1"
    api_key: "secret-1"
"#;
        assert!(parse_config(raw).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = load_config(file.path()).expect("file config loads");
        assert_eq!(config.upstream.base_url, "https://api.example.com");
    }

    #[test]
    fn missing_file_errors() {
        assert!(load_config("/nonexistent/uplink-gateway.yaml").is_err());
    }
}
