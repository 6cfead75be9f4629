//! Domain models.

mod build_outcome;
mod build_request;
mod commit_status;
mod errors;
mod pull_request_event;
mod report;
mod verdict;
mod webhook;

pub use self::{
    build_outcome::{BuildOutcomeEvent, BuildStatus},
    build_request::{BuildDispatchRequest, BuildParameter},
    commit_status::{CommitState, CommitStatusUpdate, PullRequestComment},
    errors::{ModelError, Result},
    pull_request_event::{PullRequestAction, PullRequestEvent},
    report::{CoverageSummary, Report, TestStatusCounts},
    verdict::Verdict,
    webhook::{GateOutcome, RejectionReason, WebhookRequest},
};
