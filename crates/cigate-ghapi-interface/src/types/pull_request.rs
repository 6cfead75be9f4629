use serde::{Deserialize, Serialize};

/// GitHub Pull request action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GhPullRequestAction {
    /// Opened.
    Opened,
    /// Reopened.
    Reopened,
    /// Synchronize.
    Synchronize,
    /// Any other action.
    #[default]
    #[serde(other)]
    Other,
}

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRepository {
    /// Name.
    pub name: String,
    /// Full name.
    #[serde(default)]
    pub full_name: String,
}

/// GitHub Branch.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhBranch {
    /// Reference.
    #[serde(rename = "ref")]
    pub reference: String,
    /// SHA.
    pub sha: String,
}

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Head branch.
    pub head: GhBranch,
}

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Eq, PartialEq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: GhPullRequestAction,
    /// Number.
    pub number: u64,
    /// Pull request.
    pub pull_request: GhPullRequest,
    /// Repository.
    pub repository: GhRepository,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_event() {
        let event: GhPullRequestEvent = serde_json::from_str(
            r#"{
                "action": "synchronize",
                "number": 4,
                "sender": {"login": "me"},
                "repository": {"name": "repo-x", "full_name": "me/repo-x"},
                "pull_request": {"title": "Hi", "head": {"ref": "feature-1", "sha": "abc123"}}
            }"#,
        )
        .unwrap();

        assert_eq!(event.action, GhPullRequestAction::Synchronize);
        assert_eq!(event.number, 4);
        assert_eq!(event.repository.name, "repo-x");
        assert_eq!(event.pull_request.head.reference, "feature-1");
        assert_eq!(event.pull_request.head.sha, "abc123");
    }

    #[test]
    fn parse_unknown_action() {
        let event: GhPullRequestEvent = serde_json::from_str(
            r#"{
                "action": "labeled",
                "number": 4,
                "repository": {"name": "repo-x"},
                "pull_request": {"head": {"ref": "feature-1", "sha": "abc123"}}
            }"#,
        )
        .unwrap();

        assert_eq!(event.action, GhPullRequestAction::Other);
    }
}
