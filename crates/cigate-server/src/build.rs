//! Build service wrappers.

use async_trait::async_trait;
use cigate_build_interface::{types::StartedBuild, BuildService, Result};
use cigate_models::{BuildParameter, Report};

use crate::metrics::BUILD_API_CALLS;

/// Build service with metrics.
pub struct MetricsBuildService {
    inner: Box<dyn BuildService>,
}

impl MetricsBuildService {
    /// Creates a new service.
    pub fn new(inner: Box<dyn BuildService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BuildService for MetricsBuildService {
    async fn builds_start(
        &self,
        project_name: &str,
        parameters: &[BuildParameter],
    ) -> Result<StartedBuild> {
        BUILD_API_CALLS.inc();
        self.inner.builds_start(project_name, parameters).await
    }

    async fn reports_batch_get(&self, report_arns: &[String]) -> Result<Vec<Report>> {
        BUILD_API_CALLS.inc();
        self.inner.reports_batch_get(report_arns).await
    }
}
