use crate::error::IssueError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// One key/value piece of identifying evidence in a fingerprint.
///
/// Ordering is by key, then value, both compared ordinally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContribution")]
pub struct Contribution {
    key: String,
    value: String,
}

#[derive(Deserialize)]
struct RawContribution {
    key: String,
    value: String,
}

impl TryFrom<RawContribution> for Contribution {
    type Error = IssueError;

    fn try_from(raw: RawContribution) -> Result<Self, Self::Error> {
        Contribution::new(raw.key, raw.value)
    }
}

impl Contribution {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Result<Self, IssueError> {
        let key = key.into();
        let value = value.into();

        if key.trim().is_empty() {
            return Err(IssueError::InvalidArgument(
                "contribution key must not be empty".to_string(),
            ));
        }
        if value.trim().is_empty() {
            return Err(IssueError::InvalidArgument(format!(
                "contribution value for '{}' must not be empty",
                key
            )));
        }

        Ok(Self { key, value })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Hash of the pair that is identical across processes and platforms
    pub fn stable_hash(&self) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(self.key.as_bytes());
        hasher.update([0x1f]);
        hasher.update(self.value.as_bytes());
        let digest = hasher.finalize();

        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(bytes)
    }
}

impl std::fmt::Display for Contribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
