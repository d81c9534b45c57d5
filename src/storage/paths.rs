// Storage path utilities.
// Platform directories for configuration, logs, and exported CSV files.

use std::path::PathBuf;

use directories::ProjectDirs;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shiftlog")
}

/// Path to the configuration file (~/.config/shiftlog/config.json on Linux).
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Directory for the application log file.
pub fn log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Default directory for exported shift files.
///
/// Falls back to the current directory when no home directory is known.
pub fn default_export_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("exports"))
        .unwrap_or_else(|| PathBuf::from("."))
}
