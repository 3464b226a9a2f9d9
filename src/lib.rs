//! Fingerprinting and deduplication of UI Automation accessibility findings.
//!
//! Each failing rule result on a scanned element gets a [`Fingerprint`] built
//! from the rule, its result level and the identifying properties of the
//! element and its ancestors. Issues are keyed by fingerprint in an
//! [`IssueStore`], so the same defect seen in several scans or results files
//! collapses into one [`Issue`] with several [`Location`]s.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod element;
pub mod error;
pub mod fingerprint;
pub mod issue;
pub mod output;
pub mod state;
pub mod store;

pub use fingerprint::{build_fingerprint, Fingerprint};
pub use issue::{AddResult, Issue, Location};
pub use store::{merge_issues_from_store, InMemoryIssueStore, IssueStore, OutputFileIssueStore};
