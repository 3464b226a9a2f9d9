use crate::error::SessionError;
use crate::issue::Issue;
use crate::store::{InMemoryIssueStore, IssueStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const STATE_DIR: &str = ".uia-issues";
const SESSION_FILE: &str = "session.json";

/// The issues known to the current session, persisted between invocations
#[derive(Debug, Default)]
pub struct Session {
    pub store: Arc<InMemoryIssueStore>,
    pub merged_files: BTreeSet<PathBuf>,
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
struct SessionFile {
    saved_at: DateTime<Utc>,
    #[serde(default)]
    merged_files: BTreeSet<PathBuf>,
    #[serde(default)]
    issues: Vec<Issue>,
}

impl Session {
    /// Load the session from `dir`, or start an empty one if none was saved
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let path = Self::session_path(dir);
        if !path.exists() {
            debug!("No session at {}, starting fresh", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let file: SessionFile =
            serde_json::from_str(&content).map_err(|e| SessionError::Parse {
                path: path.clone(),
                source: e,
            })?;

        debug!(
            "Loaded session with {} issues from {}",
            file.issues.len(),
            path.display()
        );

        Ok(Self {
            store: Arc::new(InMemoryIssueStore::from_issues(file.issues)),
            merged_files: file.merged_files,
            saved_at: Some(file.saved_at),
        })
    }

    /// Save the session to `dir`, replacing any previous file atomically
    pub fn save(&mut self, dir: &Path) -> Result<PathBuf, SessionError> {
        let state_dir = dir.join(STATE_DIR);
        fs::create_dir_all(&state_dir)?;

        let saved_at = Utc::now();
        let mut issues = self.store.issues();
        issues.sort_by(|a, b| a.fingerprint().cmp(b.fingerprint()));

        let file = SessionFile {
            saved_at,
            merged_files: self.merged_files.clone(),
            issues,
        };
        let json = serde_json::to_string_pretty(&file)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&state_dir)?;
        tmp.write_all(json.as_bytes())?;
        let path = state_dir.join(SESSION_FILE);
        tmp.persist(&path)?;

        self.saved_at = Some(saved_at);
        Ok(path)
    }

    /// Delete the saved session. Returns whether one existed.
    pub fn reset(dir: &Path) -> Result<bool, SessionError> {
        let path = Self::session_path(dir);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }

    pub fn session_path(dir: &Path) -> PathBuf {
        dir.join(STATE_DIR).join(SESSION_FILE)
    }
}
