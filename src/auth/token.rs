use chrono::{DateTime, Utc};

use crate::helpers::time::now_i64;

/// Bearer access token with expiration tracking. Immutable once built;
/// replaced wholesale on refresh.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value,
            issued_at,
            expires_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        now_i64() >= self.expires_at.timestamp()
    }

    /// True once the token has consumed `threshold_percent` of its total
    /// lifetime. Second-granularity math, truncating.
    ///
    /// Panics if `threshold_percent` is outside 0..=100; the value comes
    /// from config validated at load time.
    pub fn is_expiring_soon(&self, threshold_percent: i32) -> bool {
        assert!(
            (0..=100).contains(&threshold_percent),
            "threshold percent must be between 0 and 100"
        );

        let total_lifetime = self.expires_at.timestamp() - self.issued_at.timestamp();
        let threshold = (total_lifetime as f64 * (threshold_percent as f64 / 100.0)) as i64;

        now_i64() >= self.issued_at.timestamp() + threshold
    }

    /// Seconds until expiry; negative once expired.
    pub fn remaining_seconds(&self) -> i64 {
        self.expires_at.timestamp() - now_i64()
    }
}
