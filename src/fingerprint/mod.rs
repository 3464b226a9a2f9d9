//! Stable identities for accessibility findings
//!
//! A fingerprint is built from the rule that fired, its result level, and the
//! identifying properties of the element and each of its ancestors. The same
//! defect found in a later scan or in another results file produces an equal
//! fingerprint, which is what lets issues be deduplicated.

mod contribution;
mod rule;
mod scan_result;

pub use contribution::Contribution;
pub use rule::{RuleId, ScanStatus};
pub use scan_result::ScanResultFingerprint;

use crate::element::ElementView;
use crate::error::IssueError;
use serde::{Deserialize, Serialize};

/// Identity of a finding
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fingerprint {
    ScanResult(ScanResultFingerprint),
}

impl Fingerprint {
    pub fn contributions(&self) -> &[Contribution] {
        match self {
            Fingerprint::ScanResult(fp) => fp.contributions(),
        }
    }

    pub fn hash_code(&self) -> u64 {
        match self {
            Fingerprint::ScanResult(fp) => fp.hash_code(),
        }
    }

    /// First 12 hex digits of the hash, for display
    pub fn short_id(&self) -> String {
        format!("{:016x}", self.hash_code())[..12].to_string()
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Fingerprint::ScanResult(fp) => write!(f, "{}", fp),
        }
    }
}

impl From<ScanResultFingerprint> for Fingerprint {
    fn from(fp: ScanResultFingerprint) -> Self {
        Fingerprint::ScanResult(fp)
    }
}

/// Build the fingerprint for one rule result on one element
pub fn build_fingerprint<E: ElementView>(
    rule_id: &RuleId,
    status: ScanStatus,
    element: &E,
) -> Result<Fingerprint, IssueError> {
    ScanResultFingerprint::new(rule_id, status, element).map(Fingerprint::from)
}

/// Opaque issue type label for a rule result
pub fn issue_type_for(rule_id: &RuleId, status: ScanStatus) -> String {
    format!("{}:{}", rule_id, status)
}
