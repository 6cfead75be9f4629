use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref GITHUB_API_CALLS: IntCounter =
        IntCounter::new("github_api_calls", "GitHub API calls").unwrap();
    pub static ref BUILD_API_CALLS: IntCounter =
        IntCounter::new("build_api_calls", "Build service calls").unwrap();
    pub static ref SECRET_STORE_CALLS: IntCounter =
        IntCounter::new("secret_store_calls", "Secret store calls").unwrap();
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let metrics = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e })?;

    setup_process_metrics(&metrics)?;

    for counter in [&*GITHUB_API_CALLS, &*BUILD_API_CALLS, &*SECRET_STORE_CALLS] {
        metrics
            .registry
            .register(Box::new(counter.clone()))
            .map_err(|e| ServerError::MetricsError { source: e.into() })?;
    }

    Ok(metrics)
}

#[cfg(target_os = "linux")]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError { source: e.into() })
}

#[cfg(not(target_os = "linux"))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    Ok(())
}
