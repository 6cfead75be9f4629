use async_trait::async_trait;
use cigate_models::{Report, Verdict};
use shaku::{Component, Interface};
use tracing::{debug, warn};

use super::ReportSummaryGenerator;
use crate::{CoreContext, DomainError};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CollectReportsInterface: Interface {
    /// Fetch and evaluate build reports.
    ///
    /// Returns no verdict when the build produced no report, or when the
    /// reports could not be fetched.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, report_arns: &[String]) -> Option<Verdict>;
}

#[derive(Component)]
#[shaku(interface = CollectReportsInterface)]
pub(crate) struct CollectReports;

#[async_trait]
impl CollectReportsInterface for CollectReports {
    #[tracing::instrument(skip(self, ctx), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        report_arns: &[String],
    ) -> Option<Verdict> {
        if report_arns.is_empty() {
            debug!(message = "Build produced no report");
            return None;
        }

        let reports = match ctx.build_service.reports_batch_get(report_arns).await {
            Ok(reports) => reports,
            Err(e) => {
                let e = DomainError::ReportFetchFailed { source: e };
                warn!(message = "Could not fetch reports, skipping verdict", error = %e);
                return None;
            }
        };

        let generator = ReportSummaryGenerator::new(ctx.config);
        let threshold = ctx.config.reports.coverage_threshold;

        // Later reports of a same kind replace earlier ones.
        let mut verdict = reports
            .into_iter()
            .fold(Verdict::default(), |mut verdict, report| {
                match report {
                    Report::Test { arn, status_counts } => {
                        verdict.tests_passed = status_counts.failed == 0;
                        verdict.test_summary = Some(status_counts);
                        verdict.test_report_url = Some(generator.report_url(&arn));
                    }
                    Report::Coverage { arn, summary } => {
                        verdict.coverage_threshold_passed = summary.line_coverage_percentage
                            > threshold
                            && summary.branch_coverage_percentage > threshold;
                        verdict.coverage_summary = Some(summary);
                        verdict.coverage_report_url = Some(generator.report_url(&arn));
                    }
                    Report::Unknown { arn, kind } => {
                        debug!(message = "Ignoring report", arn = %arn, kind = %kind);
                    }
                }

                verdict
            });

        verdict.summary_text = generator.generate(&verdict);
        Some(verdict)
    }
}
