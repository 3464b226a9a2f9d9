use super::summary::{build_summary, build_summary_markdown, IssueSummary};
use crate::error::OutputError;
use crate::issue::Issue;
use crate::store::IssueStore;
use std::fs;
use std::path::Path;

/// Write `issues.json`, `issues.md` and `summary.json` for every issue in
/// `store`, returning the summary for display
pub fn write_issue_report(
    report_dir: &Path,
    store: &dyn IssueStore,
) -> Result<IssueSummary, OutputError> {
    if !store.is_enumerable() {
        return Err(OutputError::NotEnumerable);
    }

    fs::create_dir_all(report_dir).map_err(OutputError::CreateDir)?;

    let mut issues = store.issues();
    issues.sort_by(|a, b| {
        a.issue_type()
            .cmp(b.issue_type())
            .then_with(|| a.fingerprint().cmp(b.fingerprint()))
    });

    let summary = build_summary(&issues);

    let json = serde_json::to_string_pretty(&issues)?;
    fs::write(report_dir.join("issues.json"), json).map_err(OutputError::WriteReport)?;

    let summary_json = serde_json::to_string_pretty(&summary)?;
    fs::write(report_dir.join("summary.json"), summary_json).map_err(OutputError::WriteReport)?;

    let mut content = String::from("# Accessibility Issues\n\n");
    content.push_str(&build_summary_markdown(&summary));
    content.push_str("---\n\n");

    if issues.is_empty() {
        content.push_str("*No issues*\n");
    } else {
        for issue in &issues {
            content.push_str(&format_issue(issue));
        }
    }

    fs::write(report_dir.join("issues.md"), content).map_err(OutputError::WriteReport)?;

    Ok(summary)
}

fn format_issue(issue: &Issue) -> String {
    let mut content = String::new();

    content.push_str(&format!(
        "### `{}` ({})\n\n",
        issue.issue_type(),
        issue.fingerprint().short_id()
    ));

    content.push_str("**Fingerprint:**\n");
    for contribution in issue.fingerprint().contributions() {
        content.push_str(&format!(
            "- `{}` = `{}`\n",
            contribution.key(),
            contribution.value()
        ));
    }
    content.push('\n');

    if issue.locations().is_empty() {
        content.push_str("*No recorded locations*\n\n");
    } else {
        content.push_str("| Element | Results File | Id |\n");
        content.push_str("|---------|--------------|----|\n");
        for location in issue.locations() {
            content.push_str(&format!(
                "| {} | `{}` | {} |\n",
                location.display_info(),
                location.source(),
                location.id()
            ));
        }
        content.push('\n');
    }

    content.push_str("---\n\n");
    content
}
