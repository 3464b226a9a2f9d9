use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Where an issue was observed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    OutputFile(OutputFileLocation),
}

/// Performs the side effect of showing a location to the user
pub trait LocationOpener {
    fn open(&mut self, location: &Location) -> bool;
}

impl Location {
    pub fn display_info(&self) -> &str {
        match self {
            Location::OutputFile(loc) => &loc.display_info,
        }
    }

    /// Format-specific source, the results file path for output-file locations
    pub fn source(&self) -> String {
        match self {
            Location::OutputFile(loc) => loc.file.display().to_string(),
        }
    }

    /// Format-specific id, the element id for output-file locations
    pub fn id(&self) -> String {
        match self {
            Location::OutputFile(loc) => loc.element_id.to_string(),
        }
    }

    pub fn open(&self, opener: &mut dyn LocationOpener) -> bool {
        opener.open(self)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Location::OutputFile(loc) => write!(
                f,
                "{} in {} (element {})",
                loc.display_info,
                loc.file.display(),
                loc.element_id
            ),
        }
    }
}

/// An element inside a scan results file.
///
/// Two locations are equal when they name the same element id in the same
/// file; the display text is not part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputFileLocation {
    file: PathBuf,
    element_id: i64,
    display_info: String,
}

impl OutputFileLocation {
    pub fn new(file: impl Into<PathBuf>, element_id: i64, display_info: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            element_id,
            display_info: display_info.into(),
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn element_id(&self) -> i64 {
        self.element_id
    }
}

impl PartialEq for OutputFileLocation {
    fn eq(&self, other: &Self) -> bool {
        self.element_id == other.element_id && self.file == other.file
    }
}

impl Eq for OutputFileLocation {}

impl Hash for OutputFileLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.file.hash(state);
        self.element_id.hash(state);
    }
}

impl From<OutputFileLocation> for Location {
    fn from(loc: OutputFileLocation) -> Self {
        Location::OutputFile(loc)
    }
}
