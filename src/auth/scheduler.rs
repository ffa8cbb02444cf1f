use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::auth::provider::TokenProvider;

/// Spawn the proactive refresh loop: check the token on a fixed interval,
/// independent of request traffic. The first tick fires immediately so a
/// token is usually in place before the first inbound request.
pub fn spawn_refresh_loop(provider: Arc<TokenProvider>, refresh_rate_ms: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(refresh_rate_ms));
        loop {
            ticker.tick().await;
            run_tick(&provider).await;
        }
    })
}

/// One scheduler tick. Never fails: a failed refresh is logged and the
/// next tick retries, with lazy in-band renewal as the fallback.
pub(crate) async fn run_tick(provider: &TokenProvider) {
    debug!("running scheduled token refresh check");

    if provider.should_refresh().await {
        info!("token refresh threshold reached, initiating refresh");
        if let Err(err) = provider.force_refresh().await {
            error!("scheduled token refresh failed: {err}");
        }
        return;
    }

    match provider.current_token().await {
        Some(token) => debug!("token still valid, remaining: {}s", token.remaining_seconds()),
        None => warn!("no current token found, will attempt to obtain one on next access"),
    }
}
