use serde::Serialize;

use crate::{CoverageSummary, TestStatusCounts};

/// Outcome of the report evaluation for a build.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Verdict {
    pub tests_passed: bool,
    pub coverage_threshold_passed: bool,
    pub test_summary: Option<TestStatusCounts>,
    pub coverage_summary: Option<CoverageSummary>,
    pub test_report_url: Option<String>,
    pub coverage_report_url: Option<String>,
    pub summary_text: String,
}

impl Verdict {
    /// Both tests and coverage are green.
    pub fn passed(&self) -> bool {
        self.tests_passed && self.coverage_threshold_passed
    }
}
