// Storage module for local filesystem access.
// Resolves platform directories and writes files atomically.

pub mod paths;
pub mod store;

pub use paths::{config_path, default_export_dir, log_dir};
pub use store::{read_json, write_text};
