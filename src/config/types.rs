use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory searched for scan results when no files are given
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    /// Glob patterns (relative to `results_dir`) selecting results files
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,

    /// Directory holding the persisted session
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,

    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}
