pub mod merge;
pub mod report;
pub mod reset;
pub mod scan;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "uia-issues")]
#[command(
    author,
    version,
    about = "Fingerprint, deduplicate and merge UI Automation accessibility findings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the issues recorded in one scan results file
    Scan(ScanArgs),

    /// Merge scan results files into the session
    Merge(MergeArgs),

    /// Write reports for the issues in the session
    Report(ReportArgs),

    /// Discard the session
    Reset(ResetArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ScanArgs {
    /// Scan results file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print every fingerprint contribution
    #[arg(long)]
    pub contributions: bool,
}

#[derive(Parser, Clone)]
pub struct MergeArgs {
    /// Results files to merge (or discover under --results-dir if none given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Path to config file
    #[arg(short, long, default_value = "uia-issues.yaml")]
    pub config: PathBuf,

    /// Override the directory searched for results files
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Override the session directory
    #[arg(long, env = "UIA_ISSUES_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,

    /// Show what would be merged without saving the session
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Clone)]
pub struct ReportArgs {
    /// Path to config file
    #[arg(short, long, default_value = "uia-issues.yaml")]
    pub config: PathBuf,

    /// Override output directory
    #[arg(long)]
    pub report_dir: Option<PathBuf>,

    /// Override the session directory
    #[arg(long, env = "UIA_ISSUES_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct ResetArgs {
    /// Path to config file
    #[arg(short, long, default_value = "uia-issues.yaml")]
    pub config: PathBuf,

    /// Override the session directory
    #[arg(long, env = "UIA_ISSUES_SESSION_DIR")]
    pub session_dir: Option<PathBuf>,
}
