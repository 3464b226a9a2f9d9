use crate::issue::Issue;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize)]
pub struct IssueSummary {
    pub generated_at: String,
    pub issue_count: usize,
    pub location_count: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_source: BTreeMap<String, usize>,
}

pub fn build_summary(issues: &[Issue]) -> IssueSummary {
    let mut by_type = BTreeMap::new();
    let mut by_source = BTreeMap::new();
    let mut location_count = 0;

    for issue in issues {
        *by_type.entry(issue.issue_type().to_string()).or_insert(0) += 1;
        for location in issue.locations() {
            *by_source.entry(location.source()).or_insert(0) += 1;
            location_count += 1;
        }
    }

    IssueSummary {
        generated_at: Utc::now().to_rfc3339(),
        issue_count: issues.len(),
        location_count,
        by_type,
        by_source,
    }
}

pub(super) fn build_summary_markdown(summary: &IssueSummary) -> String {
    let mut md = String::new();

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Generated | {} |\n", summary.generated_at));
    md.push_str(&format!("| Issues | {} |\n", summary.issue_count));
    md.push_str(&format!("| Locations | {} |\n", summary.location_count));
    md.push('\n');

    if !summary.by_type.is_empty() {
        md.push_str("| Issue Type | Count |\n");
        md.push_str("|------------|-------|\n");
        for (issue_type, count) in &summary.by_type {
            md.push_str(&format!("| `{}` | {} |\n", issue_type, count));
        }
        md.push('\n');
    }

    if !summary.by_source.is_empty() {
        md.push_str("| Results File | Locations |\n");
        md.push_str("|--------------|-----------|\n");
        for (source, count) in &summary.by_source {
            md.push_str(&format!("| `{}` | {} |\n", source, count));
        }
        md.push('\n');
    }

    md
}
