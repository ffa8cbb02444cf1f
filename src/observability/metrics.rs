use prometheus::{
    HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token lifecycle
    pub token_refreshes: IntCounter,
    pub token_refresh_failures: IntCounter,
    pub token_expiry_unix: IntGauge,

    // Upstream resource calls
    pub upstream_requests: IntCounterVec,
    pub upstream_failures: IntCounterVec,
    pub upstream_request_duration: HistogramVec,

    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("uplinkgw".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            token_refreshes: IntCounter::new("token_refreshes_total", "Total access token refresh attempts").unwrap(),
            token_refresh_failures: IntCounter::new("token_refresh_failures_total", "Failed access token refreshes").unwrap(),
            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Current access token expiry timestamp").unwrap(),

            upstream_requests: IntCounterVec::new(Opts::new("upstream_requests_total", "Upstream resource requests"), &["resource"]).unwrap(),
            upstream_failures: IntCounterVec::new(Opts::new("upstream_failures_total", "Upstream request failures by reason"), &["resource", "reason"]).unwrap(),
            upstream_request_duration: HistogramVec::new(HistogramOpts::new("upstream_request_duration_seconds", "Upstream request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["resource"]).unwrap(),

            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_refreshes.clone())).unwrap();
        reg.register(Box::new(metrics.token_refresh_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_expiry_unix.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_requests.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_failures.clone())).unwrap();
        reg.register(Box::new(metrics.upstream_request_duration.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
