//! YAML flow configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml_ng::{Mapping, Value};

use crate::context::DEFAULT_CONTEXT_FILE;
use crate::discovery::DiscoveryPatterns;

pub const DEFAULT_FLOW_NAME: &str = "unnamed_flow";
pub const DEFAULT_FLOW_VERSION: &str = "1.0.0";
pub const DEFAULT_MODEL: &str = "Claude Sonnet 4 (copilot)";
pub const DEFAULT_MODE: &str = "agent";
pub const DEFAULT_REPORT_FILE: &str = "flow_report.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default = "default_name", deserialize_with = "name_or_default")]
    pub name: String,
    #[serde(default = "default_version", deserialize_with = "version_or_default")]
    pub version: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    /// Free-form settings carried through to the report.
    #[serde(default)]
    pub config: Mapping,
    #[serde(default)]
    pub flow: Vec<FlowStep>,
    #[serde(default)]
    pub file_patterns: FilePatterns,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub execution: ExecutionSettings,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            description: String::new(),
            config: Mapping::new(),
            flow: Vec::new(),
            file_patterns: FilePatterns::default(),
            output: OutputSettings::default(),
            execution: ExecutionSettings::default(),
        }
    }
}

impl FlowConfig {
    pub async fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(crate::Error::not_found(path));
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| crate::Error::io(path, e))?;

        Self::parse(&content).map_err(|e| {
            crate::Error::Config(format!("Invalid YAML in config file {}: {}", path.display(), e))
        })
    }

    /// Parse a flow from YAML text. Empty text yields the default flow.
    pub fn parse(yaml: &str) -> crate::Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        match serde_yaml_ng::from_str::<Value>(yaml)? {
            Value::Null => Ok(Self::default()),
            value => Ok(serde_yaml_ng::from_value(value)?),
        }
    }

    pub fn has_steps(&self) -> bool {
        !self.flow.is_empty()
    }

    /// Apply this flow's include/exclude lists on top of `base` patterns.
    pub fn discovery_patterns(&self, base: DiscoveryPatterns) -> DiscoveryPatterns {
        base.with_include(self.file_patterns.include.clone())
            .with_exclude(self.file_patterns.exclude.clone())
    }
}

/// One ordered step of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowStep {
    #[serde(default, rename = "step", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub step_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_true", deserialize_with = "bool_or_true")]
    pub required: bool,
}

impl FlowStep {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            name: None,
            step_type: None,
            file: file.into(),
            description: None,
            required: true,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Step name, or `step_{n}` for the 1-based position `n`.
    pub fn display_name(&self, position: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("step_{}", position))
    }

    pub fn type_label(&self) -> &str {
        self.step_type.as_deref().unwrap_or("unknown")
    }

    pub fn description_label(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePatterns {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Combined,
    Json,
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl OutputSettings {
    /// Output file under `base`; `None` when output is disabled.
    pub fn resolved_path(&self, base: &Path) -> Option<PathBuf> {
        let default = match self.format {
            OutputFormat::Combined => DEFAULT_CONTEXT_FILE,
            OutputFormat::Json => DEFAULT_REPORT_FILE,
            OutputFormat::Disabled => return None,
        };
        Some(base.join(self.path.as_deref().unwrap_or(default)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSettings {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            mode: default_mode(),
        }
    }
}

fn default_name() -> String {
    DEFAULT_FLOW_NAME.to_string()
}

fn default_version() -> String {
    DEFAULT_FLOW_VERSION.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

fn default_true() -> bool {
    true
}

/// Accept any YAML scalar as a string (`version: 1.0` parses as a number).
fn scalar<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn name_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar(deserializer)?.unwrap_or_else(default_name))
}

fn version_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar(deserializer)?.unwrap_or_else(default_version))
}

fn bool_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn string_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar(deserializer)?.unwrap_or_default())
}
