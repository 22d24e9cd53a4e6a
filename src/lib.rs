//! # prompt-flow
//!
//! Reader, flow runner, and linter for AI assistant playbooks built from
//! `*.instructions.md` and `*.prompt.md` markdown files.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompt_flow::{Discovery, combine_prompts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), prompt_flow::Error> {
//!     let discovery = Discovery::new("./playbook");
//!     let catalog = discovery.read_all().await?;
//!     println!("{} instructions", catalog.instructions.len());
//!     println!("{}", combine_prompts(&catalog.prompts));
//!     Ok(())
//! }
//! ```
//!
//! ## Running a Flow
//!
//! ```rust,no_run
//! use prompt_flow::{FlowConfig, FlowExecutor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), prompt_flow::Error> {
//!     let config = FlowConfig::load("flows/unit_test_flow.yaml").await?;
//!     let report = FlowExecutor::new(".", config).execute().await?;
//!     println!("{}: {} succeeded", report.flow_name, report.succeeded());
//!     Ok(())
//! }
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod context;
pub mod discovery;
pub mod document;
pub mod flow;
pub mod lint;

use std::path::PathBuf;

pub use common::PathMatched;
pub use config::{Settings, SettingsLoader};
pub use context::{PROMPT_SEPARATOR, combine_prompts, write_context};
pub use discovery::{Discovery, DiscoveryPatterns, DocumentCatalog, find_files};
pub use document::{
    Applicability, DocumentKind, DocumentMetadata, DocumentReader, DocumentSummary,
    ProcessedDocument, extract_frontmatter,
};
pub use flow::{
    ExecutionSettings, FlowConfig, FlowExecutor, FlowReport, FlowStep, OutputFormat,
    OutputSettings, OutputTarget, PlannedStep, StepOutcome, StepStatus,
};
pub use lint::{Diagnostic, LintReport, LintRule, Linter, Severity};

/// Error type for prompt-flow operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A file or flow config that was asked for does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading or writing a file failed.
    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML flow config could not be parsed.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A flow report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A discovery or exclude glob is malformed.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Invalid or inconsistent configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background discovery task panicked or was cancelled.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or unreadable input documents
    Input,
    /// Flow config, settings, or pattern errors
    Configuration,
    /// Serialization and other unexpected failures
    Internal,
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Error::NotFound { path: path.into() }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return Error::NotFound { path: path.into() };
        }
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound { .. } | Error::Io { .. } => ErrorCategory::Input,
            Error::Yaml(_) | Error::Pattern(_) | Error::Config(_) => ErrorCategory::Configuration,
            Error::Json(_) | Error::Internal(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::Io { path, source } => Error::io(path, source),
            config::ConfigError::Json { path, source } => {
                Error::Config(format!("Invalid settings in {}: {}", path.display(), source))
            }
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
