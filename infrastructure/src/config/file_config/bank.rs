//! Question bank and logging paths from TOML (`[bank]`, `[logging]`)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw bank configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBankConfig {
    /// JSON question file replacing the bundled bank
    pub path: Option<PathBuf>,
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log file used while the TUI owns the terminal
    pub file: Option<PathBuf>,
}
