use serde::{Deserialize, Serialize};

/// Commit status state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommitState {
    Pending,
    Success,
    Failure,
}

impl CommitState {
    /// Convert state to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }
}

impl From<CommitState> for &'static str {
    fn from(state: CommitState) -> Self {
        match state {
            CommitState::Pending => "pending",
            CommitState::Success => "success",
            CommitState::Failure => "failure",
        }
    }
}

impl std::fmt::Display for CommitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Commit status to publish on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitStatusUpdate {
    pub repo_name: String,
    pub commit_id: String,
    pub state: CommitState,
    pub target_url: String,
    pub context: String,
    pub description: String,
}

/// Comment to publish on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestComment {
    pub repo_name: String,
    pub pr_number: u64,
    pub body: String,
}
