//! Application configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::ai::ConfigError;

/// Link included in shared recipe text when none is configured.
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

/// Data directory name under the home directory.
const DEFAULT_DATA_DIR_NAME: &str = ".culinai";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the recipe store.
    pub data_dir: PathBuf,
    /// Link written at the end of shared recipes.
    pub app_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CULINAI_DATA_DIR`: data directory (default: `~/.culinai`)
    /// - `CULINAI_APP_URL`: app link for shared text (default: "http://localhost:3000")
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = match env::var("CULINAI_DATA_DIR") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
                .ok_or_else(|| ConfigError::MissingEnvVar("CULINAI_DATA_DIR".to_string()))?,
        };

        let app_url = env::var("CULINAI_APP_URL")
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_APP_URL.to_string());

        Ok(Self { data_dir, app_url })
    }

    /// Configuration rooted at an explicit directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            app_url: DEFAULT_APP_URL.to_string(),
        }
    }
}
