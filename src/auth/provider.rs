use chrono::{Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

use crate::auth::client::AuthClient;
use crate::auth::token::AccessToken;
use crate::error::GatewayError;
use crate::observability::metrics::get_metrics;

/// Single shared credential slot. Serves the current bearer value to any
/// number of concurrent callers and guarantees at most one token fetch is
/// in flight at a time.
///
/// Renewal uses check-lock-check: a caller that observes a stale slot
/// takes the renewal mutex, re-evaluates under the lock (a concurrent
/// renewer may have already refreshed) and only then fetches. Callers that
/// observe a fresh token never touch the mutex.
pub struct TokenProvider {
    auth: AuthClient,
    expiry_threshold_percent: i32,
    current: RwLock<Option<AccessToken>>,
    renewal: Mutex<()>,
}

impl TokenProvider {
    pub fn new(auth: AuthClient, expiry_threshold_percent: i32) -> Self {
        Self {
            auth,
            expiry_threshold_percent,
            current: RwLock::new(None),
            renewal: Mutex::new(()),
        }
    }

    /// Current bearer value, refreshing first when the slot is empty,
    /// expired or past the freshness threshold.
    ///
    /// A failed refresh does not discard a still-valid token: while the
    /// previous token has lifetime left it keeps being served, and the
    /// fetch error surfaces only when nothing usable remains.
    pub async fn get_access_token(&self) -> Result<String, GatewayError> {
        if self.should_refresh().await {
            let _renewal = self.renewal.lock().await;
            if self.should_refresh().await {
                if let Err(err) = self.refresh().await {
                    let current = self.current.read().await;
                    match current.as_ref() {
                        Some(token) if !token.is_expired() => {
                            warn!(
                                "token refresh failed, serving cached token for {}s more: {err}",
                                token.remaining_seconds()
                            );
                        }
                        _ => return Err(err),
                    }
                }
            }
        }

        let current = self.current.read().await;
        match current.as_ref() {
            Some(token) => Ok(token.value.clone()),
            None => Err(GatewayError::Authentication(
                "no valid access token available".to_string(),
            )),
        }
    }

    /// Unconditional serialized refresh, used by the scheduler and for
    /// explicit manual renewal. Fetch errors propagate to the caller.
    pub async fn force_refresh(&self) -> Result<(), GatewayError> {
        let _renewal = self.renewal.lock().await;
        info!("force refreshing access token");
        self.refresh().await
    }

    /// Pure renewal predicate: no token, expired token, or token past the
    /// configured lifetime threshold. No side effects.
    pub async fn should_refresh(&self) -> bool {
        let current = self.current.read().await;

        let Some(token) = current.as_ref() else {
            debug!("no token cached, refresh needed");
            return true;
        };

        if token.is_expired() {
            warn!("access token has expired, refresh needed");
            return true;
        }

        let expiring_soon = token.is_expiring_soon(self.expiry_threshold_percent);
        if expiring_soon {
            info!(
                "access token passed {}% of its lifetime, refresh needed, remaining: {}s",
                self.expiry_threshold_percent,
                token.remaining_seconds()
            );
        }

        expiring_soon
    }

    /// Snapshot of the cached token for monitoring.
    pub async fn current_token(&self) -> Option<AccessToken> {
        self.current.read().await.clone()
    }

    // Only ever called while holding the renewal mutex. On failure the
    // slot is left exactly as it was.
    async fn refresh(&self) -> Result<(), GatewayError> {
        let metrics = get_metrics().await;
        info!("refreshing upstream access token");
        metrics.token_refreshes.inc();

        let data = match self.auth.fetch_auth_token().await {
            Ok(data) => data,
            Err(err) => {
                metrics.token_refresh_failures.inc();
                error!("failed to refresh access token: {err}");
                return Err(err);
            }
        };

        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::seconds(data.expires_in);
        let token = AccessToken::new(data.access_token, issued_at, expires_at);

        metrics.token_expiry_unix.set(expires_at.timestamp());
        info!(
            "access token refreshed, valid until {expires_at}, remaining: {}s",
            token.remaining_seconds()
        );

        *self.current.write().await = Some(token);
        Ok(())
    }

    /// Seed the slot directly, bypassing the fetcher.
    #[cfg(test)]
    pub(crate) async fn install_token(&self, token: AccessToken) {
        *self.current.write().await = Some(token);
    }
}
