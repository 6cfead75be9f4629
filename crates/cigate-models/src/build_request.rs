use serde::{Deserialize, Serialize};

use crate::{ModelError, PullRequestEvent, Result};

const REPO: &str = "REPO";
const BRANCH_NAME: &str = "BRANCH_NAME";
const PR_NUMBER: &str = "PR_NUMBER";
const COMMIT_ID: &str = "COMMIT_ID";

/// Named build parameter, echoed back by the build service on completion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BuildParameter {
    pub name: String,
    pub value: String,
}

impl BuildParameter {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// What a build needs to know about the pull request it validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDispatchRequest {
    pub repo_name: String,
    pub branch_name: String,
    pub commit_id: String,
    pub pr_number: String,
}

impl BuildDispatchRequest {
    /// Convert to build parameters. Exactly four parameters are produced.
    pub fn to_parameters(&self) -> Vec<BuildParameter> {
        vec![
            BuildParameter::new(REPO, &self.repo_name),
            BuildParameter::new(BRANCH_NAME, &self.branch_name),
            BuildParameter::new(PR_NUMBER, &self.pr_number),
            BuildParameter::new(COMMIT_ID, &self.commit_id),
        ]
    }

    /// Recover a request from echoed build parameters.
    ///
    /// Unrelated parameters are ignored; a repeated name keeps its last value.
    pub fn from_parameters(parameters: &[BuildParameter]) -> Result<Self> {
        let find = |name: &str| {
            parameters
                .iter()
                .rev()
                .find(|p| p.name == name)
                .map(|p| p.value.clone())
                .ok_or_else(|| ModelError::MissingBuildParameter { name: name.into() })
        };

        Ok(Self {
            repo_name: find(REPO)?,
            branch_name: find(BRANCH_NAME)?,
            pr_number: find(PR_NUMBER)?,
            commit_id: find(COMMIT_ID)?,
        })
    }

    /// Pull request number, as a number.
    pub fn pr_number(&self) -> Result<u64> {
        self.pr_number
            .parse()
            .map_err(|_| ModelError::InvalidPullRequestNumber {
                value: self.pr_number.clone(),
            })
    }
}

impl From<&PullRequestEvent> for BuildDispatchRequest {
    fn from(event: &PullRequestEvent) -> Self {
        Self {
            repo_name: event.repo_name.clone(),
            branch_name: event.branch_name.clone(),
            commit_id: event.commit_id.clone(),
            pr_number: event.pr_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::PullRequestAction;

    fn sample_event() -> PullRequestEvent {
        PullRequestEvent {
            action: PullRequestAction::Opened,
            repo_name: "repo-x".into(),
            branch_name: "feature-1".into(),
            commit_id: "abc123".into(),
            pr_number: 12,
        }
    }

    #[test]
    fn to_parameters() {
        let request = BuildDispatchRequest::from(&sample_event());
        assert_eq!(
            request.to_parameters(),
            vec![
                BuildParameter::new("REPO", "repo-x"),
                BuildParameter::new("BRANCH_NAME", "feature-1"),
                BuildParameter::new("PR_NUMBER", "12"),
                BuildParameter::new("COMMIT_ID", "abc123"),
            ]
        );
    }

    #[test]
    fn from_parameters_ignores_extra_entries() {
        let mut parameters = BuildDispatchRequest::from(&sample_event()).to_parameters();
        parameters.insert(0, BuildParameter::new("CODEBUILD_SRC_DIR", "/src"));

        let request = BuildDispatchRequest::from_parameters(&parameters).unwrap();
        assert_eq!(request, BuildDispatchRequest::from(&sample_event()));
        assert_eq!(request.pr_number().unwrap(), 12);
    }

    #[test]
    fn from_parameters_missing() {
        let parameters = vec![BuildParameter::new("REPO", "repo-x")];
        assert_eq!(
            BuildDispatchRequest::from_parameters(&parameters).unwrap_err(),
            ModelError::MissingBuildParameter {
                name: "BRANCH_NAME".into()
            }
        );
    }

    #[test]
    fn invalid_pr_number() {
        let mut request = BuildDispatchRequest::from(&sample_event());
        request.pr_number = "abc".into();
        assert!(request.pr_number().is_err());
    }
}
