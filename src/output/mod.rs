mod report;
mod summary;

pub use report::write_issue_report;
pub use summary::{build_summary, IssueSummary};
