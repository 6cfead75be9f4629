use serde::{Deserialize, Serialize};

/// Test case counts per status.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestStatusCounts {
    #[serde(rename = "SUCCEEDED", default)]
    pub succeeded: u64,
    #[serde(rename = "FAILED", default)]
    pub failed: u64,
    #[serde(rename = "SKIPPED", default)]
    pub skipped: u64,
}

/// Coverage percentages.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub line_coverage_percentage: f64,
    pub branch_coverage_percentage: f64,
}

/// Build report.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Test {
        arn: String,
        status_counts: TestStatusCounts,
    },
    Coverage {
        arn: String,
        summary: CoverageSummary,
    },
    /// Report kind this gate does not evaluate.
    Unknown { arn: String, kind: String },
}

impl Report {
    pub fn arn(&self) -> &str {
        match self {
            Self::Test { arn, .. } | Self::Coverage { arn, .. } | Self::Unknown { arn, .. } => {
                arn
            }
        }
    }
}
