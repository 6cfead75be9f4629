//! CodeBuild driver.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_codebuild::{
    types::{EnvironmentVariable, EnvironmentVariableType, Report as SdkReport, ReportType},
    Client,
};
use cigate_build_interface::{types::StartedBuild, BuildError, BuildService, Result};
use cigate_models::{BuildParameter, CoverageSummary, Report, TestStatusCounts};

use crate::errors::AwsError;

/// CodeBuild service.
pub struct CodeBuildService {
    client: Client,
}

impl CodeBuildService {
    /// Creates a new service.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

fn environment_variables(parameters: &[BuildParameter]) -> Result<Vec<EnvironmentVariable>> {
    parameters
        .iter()
        .map(|p| {
            EnvironmentVariable::builder()
                .name(&p.name)
                .value(&p.value)
                .r#type(EnvironmentVariableType::Plaintext)
                .build()
                .map_err(|e| BuildError::ImplementationError { source: e.into() })
        })
        .collect()
}

fn convert_report(report: &SdkReport) -> Report {
    let arn = report.arn().unwrap_or_default().to_string();

    match (report.r#type(), report.test_summary(), report.code_coverage_summary()) {
        (Some(ReportType::Test), Some(summary), _) => {
            let count = |status: &str| {
                summary
                    .status_counts()
                    .get(status)
                    .map(|&c| u64::try_from(c).unwrap_or_default())
                    .unwrap_or_default()
            };

            Report::Test {
                arn,
                status_counts: TestStatusCounts {
                    succeeded: count("SUCCEEDED"),
                    failed: count("FAILED"),
                    skipped: count("SKIPPED"),
                },
            }
        }
        (Some(ReportType::CodeCoverage), _, Some(summary)) => Report::Coverage {
            arn,
            summary: CoverageSummary {
                line_coverage_percentage: summary.line_coverage_percentage().unwrap_or_default(),
                branch_coverage_percentage: summary
                    .branch_coverage_percentage()
                    .unwrap_or_default(),
            },
        },
        (kind, _, _) => Report::Unknown {
            arn,
            kind: kind.map(|k| k.as_str().to_string()).unwrap_or_default(),
        },
    }
}

#[async_trait]
impl BuildService for CodeBuildService {
    #[tracing::instrument(skip(self), ret)]
    async fn builds_start(
        &self,
        project_name: &str,
        parameters: &[BuildParameter],
    ) -> Result<StartedBuild> {
        let output = self
            .client
            .start_build()
            .project_name(project_name)
            .set_environment_variables_override(Some(environment_variables(parameters)?))
            .send()
            .await
            .map_err(AwsError::from_sdk)?;

        let build = output
            .build_value()
            .ok_or(AwsError::IncompleteResponse { field: "build" })?;

        Ok(StartedBuild {
            id: build.id().unwrap_or_default().to_string(),
            log_deep_link: build
                .logs()
                .and_then(|logs| logs.deep_link())
                .unwrap_or_default()
                .to_string(),
        })
    }

    #[tracing::instrument(skip(self))]
    async fn reports_batch_get(&self, report_arns: &[String]) -> Result<Vec<Report>> {
        let output = self
            .client
            .batch_get_reports()
            .set_report_arns(Some(report_arns.to_vec()))
            .send()
            .await
            .map_err(AwsError::from_sdk)?;

        Ok(output.reports().iter().map(convert_report).collect())
    }
}
