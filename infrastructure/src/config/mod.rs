//! Configuration loading for quizzly
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment (`QUIZZLY_SECTION__KEY`, plus `GEMINI_API_KEY`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quizzly.toml` or `./.quizzly.toml`
//! 4. Global: `<config_dir>/quizzly/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GEMINI_ENDPOINT, FileBankConfig, FileConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileProviderConfig, FileProviderKind,
    FileQuizConfig,
};
pub use loader::{API_KEY_ENV, APP_DIR, ConfigLoader, ENV_PREFIX};
