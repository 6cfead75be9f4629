//! Gate logic.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod handlers;
pub mod use_cases;

pub use context::CoreContext;
#[cfg(any(test, feature = "testkit"))]
pub use context::tests::CoreContextTest;
pub use errors::{DomainError, Result};
pub use handlers::{HandlerMessage, HandlerResponse};
use shaku::module;
use use_cases::{
    builds::dispatch_build::DispatchBuild,
    events::{
        process_build_completed_event::ProcessBuildCompletedEvent,
        process_pull_request_webhook::ProcessPullRequestWebhook,
    },
    reports::collect_reports::CollectReports,
    status::{post_report_comment::PostReportComment, report_commit_status::ReportCommitStatus},
    webhook::authenticate_webhook::AuthenticateWebhook,
};

module! {
    pub CoreModule {
        components = [
            AuthenticateWebhook, DispatchBuild, CollectReports,
            ReportCommitStatus, PostReportComment,
            ProcessPullRequestWebhook, ProcessBuildCompletedEvent
        ],
        providers = []
    }
}
