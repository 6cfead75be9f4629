use cigate_config::Config;
use cigate_crypto::encode_uri;
use cigate_models::{CoverageSummary, TestStatusCounts, Verdict};

const PASSED_COLOR: &str = "brightgreen";
const FAILED_COLOR: &str = "red";
const NO_REPORT_TEXT: &str = "No test or coverage report found for this build.";

/// Renders report links and the markdown summary of a verdict.
pub struct ReportSummaryGenerator<'a> {
    config: &'a Config,
}

impl<'a> ReportSummaryGenerator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Console URL of a report, from its identifier.
    ///
    /// `arn:aws:codebuild:<region>:<account>:report/<name>:<id>` links to
    /// `<console>/<name>/<name>:<id>`.
    pub fn report_url(&self, report_arn: &str) -> String {
        let name_with_id = report_arn.split('/').nth(1).unwrap_or_default();
        let name = name_with_id.split(':').next().unwrap_or_default();

        encode_uri(&format!(
            "{}/{name}/{name_with_id}",
            self.config.build.report_console_url
        ))
    }

    /// Markdown summary, with one badge per available report.
    pub fn generate(&self, verdict: &Verdict) -> String {
        let mut badges = Vec::new();
        if let Some(counts) = &verdict.test_summary {
            badges.push(self.test_badge(
                counts,
                verdict.tests_passed,
                verdict.test_report_url.as_deref().unwrap_or_default(),
            ));
        }
        if let Some(summary) = &verdict.coverage_summary {
            badges.push(self.coverage_badge(
                summary,
                verdict.coverage_threshold_passed,
                verdict.coverage_report_url.as_deref().unwrap_or_default(),
            ));
        }

        if badges.is_empty() {
            NO_REPORT_TEXT.into()
        } else {
            badges.join(" ")
        }
    }

    fn test_badge(&self, counts: &TestStatusCounts, passed: bool, report_url: &str) -> String {
        let badge_url = encode_uri(&format!(
            "{}/Tests-{} passed, {} failed, {} skipped-{}",
            self.config.reports.badge_root_url,
            counts.succeeded,
            counts.failed,
            counts.skipped,
            color(passed)
        ));

        format!("[![Test report]({badge_url})]({report_url})")
    }

    fn coverage_badge(&self, summary: &CoverageSummary, passed: bool, report_url: &str) -> String {
        // Dashes are doubled to escape them in badge labels.
        let badge_url = encode_uri(&format!(
            "{}/Coverage-Lines--{}%, Branches--{}%-{}",
            self.config.reports.badge_root_url,
            summary.line_coverage_percentage,
            summary.branch_coverage_percentage,
            color(passed)
        ));

        format!("[![Coverage report]({badge_url})]({report_url})")
    }
}

fn color(passed: bool) -> &'static str {
    if passed {
        PASSED_COLOR
    } else {
        FAILED_COLOR
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        Config::from_env_no_version().unwrap()
    }

    #[test]
    fn report_url() {
        let config = config();
        assert_eq!(
            ReportSummaryGenerator::new(&config)
                .report_url("arn:aws:codebuild:us-east-1:123456789012:report/proj-tests:abcd-1234"),
            "https://console.aws.amazon.com/codesuite/codebuild/testReports/reports/proj-tests/proj-tests:abcd-1234"
        );
    }

    #[test]
    fn generate_both_badges() {
        let config = config();
        let verdict = Verdict {
            tests_passed: true,
            coverage_threshold_passed: false,
            test_summary: Some(TestStatusCounts {
                succeeded: 10,
                failed: 0,
                skipped: 1,
            }),
            coverage_summary: Some(CoverageSummary {
                line_coverage_percentage: 95.5,
                branch_coverage_percentage: 90.0,
            }),
            test_report_url: Some("https://tests".into()),
            coverage_report_url: Some("https://coverage".into()),
            ..Default::default()
        };

        assert_eq!(
            ReportSummaryGenerator::new(&config).generate(&verdict),
            "[![Test report](https://img.shields.io/badge/Tests-10%20passed,%200%20failed,%201%20skipped-brightgreen)](https://tests) \
             [![Coverage report](https://img.shields.io/badge/Coverage-Lines--95.5%25,%20Branches--90%25-red)](https://coverage)"
        );
    }

    #[test]
    fn generate_test_badge_only() {
        let config = config();
        let verdict = Verdict {
            tests_passed: false,
            test_summary: Some(TestStatusCounts {
                succeeded: 3,
                failed: 2,
                skipped: 0,
            }),
            test_report_url: Some("https://tests".into()),
            ..Default::default()
        };

        assert_eq!(
            ReportSummaryGenerator::new(&config).generate(&verdict),
            "[![Test report](https://img.shields.io/badge/Tests-3%20passed,%202%20failed,%200%20skipped-red)](https://tests)"
        );
    }

    #[test]
    fn generate_without_reports() {
        let config = config();
        assert_eq!(
            ReportSummaryGenerator::new(&config).generate(&Verdict::default()),
            NO_REPORT_TEXT
        );
    }
}
