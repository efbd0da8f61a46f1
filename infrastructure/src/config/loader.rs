//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Directory name under the platform config/data dirs
pub const APP_DIR: &str = "quizzly";

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["quizzly.toml", ".quizzly.toml"];

/// Prefix for environment overrides (`QUIZZLY_QUIZ__TOPIC=...`)
pub const ENV_PREFIX: &str = "QUIZZLY_";

/// Raw environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `QUIZZLY_*` and `GEMINI_API_KEY`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quizzly.toml` or `./.quizzly.toml`
    /// 4. Global: `<config_dir>/quizzly/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration plus the environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(
                Env::raw()
                    .only(&[API_KEY_ENV])
                    .map(|_| "provider.api_key".into()),
            )
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default log file location
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("quizzly.log"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        let env_set = std::env::vars().any(|(k, _)| k.starts_with(ENV_PREFIX));
        let key_set = std::env::var_os(API_KEY_ENV).is_some();
        println!(
            "  [{}] Env:     {}* variables",
            if env_set { "FOUND" } else { "     " },
            ENV_PREFIX
        );
        println!(
            "  [{}] Env:     {}",
            if key_set { "FOUND" } else { "     " },
            API_KEY_ENV
        );

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            println!("  [{}] --config: {}", mark, path.display());
        }

        match Self::project_config_path() {
            Some(path) => println!("  [FOUND] Project: {}", path.display()),
            None => println!("  [     ] Project: ./quizzly.toml or ./.quizzly.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", mark, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
