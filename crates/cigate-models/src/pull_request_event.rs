use serde::{Deserialize, Serialize};

/// Pull request action.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PullRequestAction {
    Opened,
    Reopened,
    Synchronize,
    #[default]
    #[serde(other)]
    Other,
}

impl PullRequestAction {
    /// Only these actions can trigger a build.
    pub fn triggers_build(self) -> bool {
        matches!(self, Self::Opened | Self::Reopened | Self::Synchronize)
    }
}

/// Authenticated pull request event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestEvent {
    pub action: PullRequestAction,
    pub repo_name: String,
    pub branch_name: String,
    pub commit_id: String,
    pub pr_number: u64,
}

#[cfg(test)]
mod tests {
    use super::PullRequestAction;

    #[test]
    fn triggers_build() {
        assert!(PullRequestAction::Opened.triggers_build());
        assert!(PullRequestAction::Reopened.triggers_build());
        assert!(PullRequestAction::Synchronize.triggers_build());
        assert!(!PullRequestAction::Other.triggers_build());
    }
}
