use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_results_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_include() -> Vec<String> {
    vec!["**/*.a11ytest.json".to_string()]
}

pub fn default_session_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_report_dir() -> PathBuf {
    PathBuf::from("reports")
}
