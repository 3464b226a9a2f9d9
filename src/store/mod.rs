//! Fingerprint-keyed issue collections and merging between them

mod memory;
mod merge;
mod output_file;

pub use memory::InMemoryIssueStore;
pub use merge::merge_issues_from_store;
pub use output_file::OutputFileIssueStore;

use crate::error::IssueError;
use crate::fingerprint::Fingerprint;
use crate::issue::{AddResult, Issue, Location};

/// A collection of issues addressed by fingerprint.
///
/// Capabilities differ per store: check `is_enumerable` before relying on
/// `issues`, and treat `AddResult::NotSupported` as a normal answer from
/// stores that are not updatable.
pub trait IssueStore: Send + Sync {
    fn is_enumerable(&self) -> bool;

    fn is_updatable(&self) -> bool;

    /// Snapshot of all issues, in no particular order. Empty when the store
    /// is not enumerable.
    fn issues(&self) -> Vec<Issue>;

    fn try_find_issue(&self, fingerprint: &Fingerprint) -> Option<Issue>;

    fn add_issue(&self, issue: Issue) -> AddResult;

    /// Insert `issue`, or fold its locations into the stored issue with the
    /// same fingerprint, as one step. `Added` means the store changed.
    fn merge_issue(&self, issue: Issue) -> AddResult;

    /// Add a location to the stored issue with this fingerprint
    fn add_location(
        &self,
        fingerprint: &Fingerprint,
        location: Location,
    ) -> Result<AddResult, IssueError>;
}
