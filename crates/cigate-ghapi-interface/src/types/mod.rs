//! GitHub types.

mod commit_status;
mod pull_request;

pub use commit_status::GhCommitStatusState;
pub use pull_request::{
    GhBranch, GhPullRequest, GhPullRequestAction, GhPullRequestEvent, GhRepository,
};
