pub(crate) mod collect_reports;
pub(crate) mod utils;

pub use collect_reports::CollectReportsInterface;
#[cfg(any(test, feature = "testkit"))]
pub use collect_reports::MockCollectReportsInterface;
pub use utils::ReportSummaryGenerator;
