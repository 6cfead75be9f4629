mod summary;

pub use summary::ReportSummaryGenerator;
