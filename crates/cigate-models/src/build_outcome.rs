use serde::{Deserialize, Serialize};

use crate::BuildDispatchRequest;

/// Final build status.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    Succeeded,
    Failed,
    #[default]
    #[serde(other)]
    Other,
}

/// Completed build, with the pull request it was dispatched for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcomeEvent {
    pub build_status: BuildStatus,
    pub report_arns: Vec<String>,
    pub build_log_url: String,
    pub request: BuildDispatchRequest,
}
