use super::contribution::Contribution;
use super::rule::{RuleId, ScanStatus};
use crate::element::{ElementView, StringProperty};
use crate::error::IssueError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

const HASH_SEED: u64 = 17;
const HASH_PRIME: u64 = 31;

/// String properties collected at every ancestor level. ControlType is
/// resolved separately since it is stored as a numeric id.
const RULE_AGNOSTIC_PROPERTIES: [StringProperty; 7] = [
    StringProperty::AcceleratorKey,
    StringProperty::AccessKey,
    StringProperty::AutomationId,
    StringProperty::ClassName,
    StringProperty::FrameworkId,
    StringProperty::LocalizedControlType,
    StringProperty::Name,
];

/// Fingerprint of one rule result on one element.
///
/// Contributions are kept sorted and deduplicated, and the hash is computed
/// once at construction, so equal evidence always yields equal fingerprints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "FingerprintRecord", into = "FingerprintRecord")]
pub struct ScanResultFingerprint {
    contributions: Vec<Contribution>,
    hash: u64,
}

#[derive(Serialize, Deserialize)]
struct FingerprintRecord {
    contributions: Vec<Contribution>,
}

impl From<FingerprintRecord> for ScanResultFingerprint {
    fn from(record: FingerprintRecord) -> Self {
        Self::from_contributions(record.contributions)
    }
}

impl From<ScanResultFingerprint> for FingerprintRecord {
    fn from(fingerprint: ScanResultFingerprint) -> Self {
        Self {
            contributions: fingerprint.contributions,
        }
    }
}

impl ScanResultFingerprint {
    /// Build the fingerprint for `rule_id` evaluated with `status` on `element`
    pub fn new<E: ElementView>(
        rule_id: &RuleId,
        status: ScanStatus,
        element: &E,
    ) -> Result<Self, IssueError> {
        let mut contributions = BTreeSet::new();

        contributions.insert(Contribution::new("RuleId", rule_id.as_str())?);
        contributions.insert(Contribution::new("Level", status.result_level())?);

        if let Some(property) = rule_id.rule_specific_property() {
            if let Some(value) = element.bool_property(property) {
                contributions.insert(Contribution::new(property.key(), value.to_string())?);
            }
        }

        add_rule_agnostic_contributions(&mut contributions, element, 0)?;

        let mut ancestor = element.parent();
        let mut level = 1;
        while let Some(node) = ancestor {
            add_rule_agnostic_contributions(&mut contributions, &node, level)?;
            ancestor = node.parent();
            level += 1;
        }

        Ok(Self::from_contributions(contributions))
    }

    /// Build from contributions in any order; duplicates collapse
    pub fn from_contributions(contributions: impl IntoIterator<Item = Contribution>) -> Self {
        let contributions: Vec<Contribution> = contributions
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let hash = contributions.iter().fold(HASH_SEED, |hash, c| {
            hash.wrapping_mul(HASH_PRIME).wrapping_add(c.stable_hash())
        });

        Self {
            contributions,
            hash,
        }
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    pub fn hash_code(&self) -> u64 {
        self.hash
    }
}

fn add_rule_agnostic_contributions<E: ElementView>(
    contributions: &mut BTreeSet<Contribution>,
    element: &E,
    level: usize,
) -> Result<(), IssueError> {
    let prefix = if level == 0 {
        String::new()
    } else {
        format!("Ancestor{}.", level)
    };

    // The top-most window's name is too generic to tell findings apart,
    // unless that window is the element under test.
    let ignore_name = level > 0 && element.parent().is_none();

    for property in RULE_AGNOSTIC_PROPERTIES {
        if ignore_name && property == StringProperty::Name {
            continue;
        }
        add_if_present(
            contributions,
            &prefix,
            property.key(),
            element.string_property(property),
        )?;
    }

    add_if_present(
        contributions,
        &prefix,
        "ControlType",
        element.control_type_name(),
    )
}

fn add_if_present(
    contributions: &mut BTreeSet<Contribution>,
    prefix: &str,
    key: &str,
    value: Option<&str>,
) -> Result<(), IssueError> {
    match value {
        Some(value) if !value.trim().is_empty() => {
            contributions.insert(Contribution::new(format!("{}{}", prefix, key), value)?);
            Ok(())
        }
        _ => Ok(()),
    }
}

impl PartialEq for ScanResultFingerprint {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.contributions.len() == other.contributions.len()
            && self.contributions == other.contributions
    }
}

impl Eq for ScanResultFingerprint {}

impl Hash for ScanResultFingerprint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Ord for ScanResultFingerprint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.contributions
            .len()
            .cmp(&other.contributions.len())
            .then(self.hash.cmp(&other.hash))
            .then_with(|| self.contributions.cmp(&other.contributions))
    }
}

impl PartialOrd for ScanResultFingerprint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ScanResultFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.contributions.iter().map(|c| c.to_string()).collect();
        f.write_str(&parts.join("; "))
    }
}
