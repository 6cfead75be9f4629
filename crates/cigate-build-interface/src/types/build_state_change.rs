use cigate_models::{BuildDispatchRequest, BuildOutcomeEvent, BuildParameter, BuildStatus};
use serde::{Deserialize, Serialize};

/// Build state change notification.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BuildStateChangeEvent {
    /// Detail.
    pub detail: BuildStateChangeDetail,
}

/// Build state change detail.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct BuildStateChangeDetail {
    /// Build status.
    pub build_status: BuildStatus,
    /// Additional information.
    pub additional_information: BuildAdditionalInformation,
}

/// Build additional information.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BuildAdditionalInformation {
    /// Report identifiers.
    #[serde(rename = "reportArns", default)]
    pub report_arns: Vec<String>,
    /// Logs.
    pub logs: BuildLogs,
    /// Environment.
    pub environment: BuildEnvironment,
}

/// Build logs.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BuildLogs {
    /// Log deep link.
    #[serde(rename = "deep-link")]
    pub deep_link: String,
}

/// Build environment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Environment variables.
    #[serde(rename = "environment-variables", default)]
    pub environment_variables: Vec<BuildParameter>,
}

impl BuildStateChangeEvent {
    /// Convert to a build outcome, recovering the dispatched pull request.
    pub fn into_outcome(self) -> cigate_models::Result<BuildOutcomeEvent> {
        let info = self.detail.additional_information;
        let request = BuildDispatchRequest::from_parameters(&info.environment.environment_variables)?;

        Ok(BuildOutcomeEvent {
            build_status: self.detail.build_status,
            report_arns: info.report_arns,
            build_log_url: info.logs.deep_link,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const EVENT: &str = r#"{
        "version": "0",
        "detail-type": "CodeBuild Build State Change",
        "detail": {
            "build-status": "SUCCEEDED",
            "project-name": "node-js-test",
            "additional-information": {
                "reportArns": ["arn:aws:codebuild:us-east-1:123:report/node-js-test-tests:1"],
                "logs": {"deep-link": "https://console.aws.amazon.com/cloudwatch/logs"},
                "environment": {
                    "image": "aws/codebuild/standard:5.0",
                    "environment-variables": [
                        {"name": "REPO", "type": "PLAINTEXT", "value": "repo-x"},
                        {"name": "BRANCH_NAME", "type": "PLAINTEXT", "value": "feature-1"},
                        {"name": "PR_NUMBER", "type": "PLAINTEXT", "value": "7"},
                        {"name": "COMMIT_ID", "type": "PLAINTEXT", "value": "abc123"}
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn into_outcome() {
        let event: BuildStateChangeEvent = serde_json::from_str(EVENT).unwrap();
        let outcome = event.into_outcome().unwrap();

        assert_eq!(outcome.build_status, BuildStatus::Succeeded);
        assert_eq!(outcome.report_arns.len(), 1);
        assert_eq!(
            outcome.build_log_url,
            "https://console.aws.amazon.com/cloudwatch/logs"
        );
        assert_eq!(
            outcome.request,
            BuildDispatchRequest {
                repo_name: "repo-x".into(),
                branch_name: "feature-1".into(),
                commit_id: "abc123".into(),
                pr_number: "7".into(),
            }
        );
    }

    #[test]
    fn other_status() {
        let event: BuildStateChangeEvent =
            serde_json::from_str(&EVENT.replace("SUCCEEDED", "STOPPED")).unwrap();
        assert_eq!(event.detail.build_status, BuildStatus::Other);
    }
}
