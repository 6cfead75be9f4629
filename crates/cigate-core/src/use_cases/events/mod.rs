pub(crate) mod process_build_completed_event;
pub(crate) mod process_pull_request_webhook;

pub use process_build_completed_event::ProcessBuildCompletedEventInterface;
pub use process_pull_request_webhook::ProcessPullRequestWebhookInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    process_build_completed_event::MockProcessBuildCompletedEventInterface,
    process_pull_request_webhook::MockProcessPullRequestWebhookInterface,
};
