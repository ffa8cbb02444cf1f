use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use uplink_gateway::auth::client::AuthClient;
use uplink_gateway::auth::provider::TokenProvider;
use uplink_gateway::auth::scheduler;
use uplink_gateway::config::loader::load_config;
use uplink_gateway::server::{self, AppState};
use uplink_gateway::upstream::{self, UpstreamClient};
use uplink_gateway::utils::logging::{self, LogLevel};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "uplink-gateway.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. CLI + YAML config
    let args = Args::parse();
    let config = load_config(&args.config)?;
    logging::init(config.logging.as_ref(), args.log_level);

    // 2. Outbound HTTP client with bounded timeouts
    let http = upstream::build_http_client(&config.upstream)?;

    // 3. Credential lifecycle: fetcher, cached provider, background refresh loop
    let auth = AuthClient::new(http.clone(), &config.upstream);
    let tokens = Arc::new(TokenProvider::new(
        auth,
        config.upstream.token.expiry_threshold_percent,
    ));
    let _refresh_loop =
        scheduler::spawn_refresh_loop(tokens.clone(), config.upstream.token.refresh_rate_ms);

    // 4. Resource clients + HTTP surface
    let upstream_client = UpstreamClient::new(http, tokens, Arc::new(config.upstream.clone()));
    let state = AppState::new(upstream_client).await;

    server::start(&config, state).await
}
