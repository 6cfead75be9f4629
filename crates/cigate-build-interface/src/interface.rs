use async_trait::async_trait;
use cigate_models::{BuildParameter, Report};

use crate::{types::StartedBuild, Result};

/// Build service interface.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildService: Send + Sync {
    /// Start a build of a project, overriding its environment with parameters.
    async fn builds_start(
        &self,
        project_name: &str,
        parameters: &[BuildParameter],
    ) -> Result<StartedBuild>;

    /// Get reports from their identifiers, in one call.
    async fn reports_batch_get(&self, report_arns: &[String]) -> Result<Vec<Report>>;
}
