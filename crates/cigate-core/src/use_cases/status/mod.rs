pub(crate) mod post_report_comment;
pub(crate) mod report_commit_status;

pub use post_report_comment::PostReportCommentInterface;
pub use report_commit_status::ReportCommitStatusInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    post_report_comment::MockPostReportCommentInterface,
    report_commit_status::MockReportCommitStatusInterface,
};
