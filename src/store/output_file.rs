use super::IssueStore;
use crate::element::{ElementRef, ElementTree};
use crate::error::{IssueError, SnapshotError};
use crate::fingerprint::{build_fingerprint, issue_type_for, Fingerprint};
use crate::issue::{AddResult, Issue, Location, OutputFileLocation};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read-only store of the issues recorded in one scan results file
#[derive(Debug)]
pub struct OutputFileIssueStore {
    source: PathBuf,
    issues: HashMap<Fingerprint, Issue>,
}

impl OutputFileIssueStore {
    /// Extract issues from every failing or uncertain element of `tree`
    pub fn from_tree(tree: &ElementTree, source: &Path) -> Result<Self, IssueError> {
        let mut issues: HashMap<Fingerprint, Issue> = HashMap::new();
        let mut location_count = 0;

        for element in tree.elements() {
            let Some(scan) = element.scan() else {
                continue;
            };
            if !scan.status.needs_attention() {
                continue;
            }

            for outcome in &scan.results {
                let fingerprint = build_fingerprint(&outcome.rule_id, outcome.status, &element)?;

                let issue = match issues.entry(fingerprint) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        let issue = Issue::new(
                            entry.key().clone(),
                            issue_type_for(&outcome.rule_id, outcome.status),
                        )?;
                        entry.insert(issue)
                    }
                };

                if issue.add_location(location_for(source, &element)) == AddResult::Added {
                    location_count += 1;
                }
            }
        }

        debug!(
            "Extracted {} issues at {} locations from {}",
            issues.len(),
            location_count,
            source.display()
        );

        Ok(Self {
            source: source.to_path_buf(),
            issues,
        })
    }

    /// Load a snapshot file and extract its issues.
    ///
    /// Locations record the canonical path, so one file reached through
    /// different spellings yields equal locations.
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let tree = ElementTree::load(path)?;
        let source = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Ok(Self::from_tree(&tree, &source)?)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

fn location_for(source: &Path, element: &ElementRef<'_>) -> Location {
    OutputFileLocation::new(source, element.id(), element.describe()).into()
}

impl IssueStore for OutputFileIssueStore {
    fn is_enumerable(&self) -> bool {
        true
    }

    fn is_updatable(&self) -> bool {
        false
    }

    fn issues(&self) -> Vec<Issue> {
        self.issues.values().cloned().collect()
    }

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<Issue> {
        self.issues.get(fingerprint).cloned()
    }

    fn add_issue(&self, _issue: Issue) -> AddResult {
        AddResult::NotSupported
    }

    fn merge_issue(&self, _issue: Issue) -> AddResult {
        AddResult::NotSupported
    }

    fn add_location(
        &self,
        _fingerprint: &Fingerprint,
        _location: Location,
    ) -> Result<AddResult, IssueError> {
        Ok(AddResult::NotSupported)
    }
}
