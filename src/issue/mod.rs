mod location;

pub use location::{Location, LocationOpener, OutputFileLocation};

use crate::error::IssueError;
use crate::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};

/// Outcome of adding an issue or a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddResult {
    NotSupported,
    AlreadyExists,
    Added,
}

/// One unique finding and every place it has been seen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IssueRecord")]
pub struct Issue {
    fingerprint: Fingerprint,
    issue_type: String,
    locations: Vec<Location>,
}

#[derive(Deserialize)]
struct IssueRecord {
    fingerprint: Fingerprint,
    issue_type: String,
    #[serde(default)]
    locations: Vec<Location>,
}

impl TryFrom<IssueRecord> for Issue {
    type Error = IssueError;

    fn try_from(record: IssueRecord) -> Result<Self, Self::Error> {
        let mut issue = Issue::new(record.fingerprint, record.issue_type)?;
        for location in record.locations {
            issue.add_location(location);
        }
        Ok(issue)
    }
}

impl Issue {
    pub fn new(fingerprint: Fingerprint, issue_type: impl Into<String>) -> Result<Self, IssueError> {
        let issue_type = issue_type.into();
        if issue_type.trim().is_empty() {
            return Err(IssueError::InvalidArgument(
                "issue type must not be empty".to_string(),
            ));
        }

        Ok(Self {
            fingerprint,
            issue_type,
            locations: Vec::new(),
        })
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Record another place this issue was seen. Locations are never removed.
    pub fn add_location(&mut self, location: Location) -> AddResult {
        if self.locations.contains(&location) {
            return AddResult::AlreadyExists;
        }
        self.locations.push(location);
        AddResult::Added
    }
}
