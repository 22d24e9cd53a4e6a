//! Tool settings: `prompt-flow.json` files plus `PROMPT_FLOW_*` overrides.
//!
//! ```rust,no_run
//! use prompt_flow::config::SettingsLoader;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut loader = SettingsLoader::new();
//! let settings = loader.load(std::path::Path::new(".")).await?;
//! println!("{:?}", settings.output_file());
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod settings;

use std::path::PathBuf;

pub use env::{ENV_PREFIX, EnvOverrides};
pub use settings::{SETTINGS_FILE, Settings, SettingsLoader};

use thiserror::Error;

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON for [`Settings`]
    #[error("Invalid settings in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An override carried a value of the wrong shape
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The offending key
        key: String,
        /// Error message
        message: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
