use std::sync::OnceLock;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload. Safe to call more than once; the
/// recorder is installed on the first call only.
pub fn init_metrics() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            let handle = PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder");

            // Pre-register counters so they appear even before the first increment.
            counter!("view_fetch_failures_total").absolute(0);
            counter!("theme_toggles_total").absolute(0);
            for table in ["influencers", "predictions"] {
                counter!("store_requests_total", "table" => table).absolute(0);
                counter!("store_failures_total", "table" => table).absolute(0);
                histogram!("store_request_seconds", "table" => table).record(0.0);
            }

            handle
        })
        .clone()
}
