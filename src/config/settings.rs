//! `prompt-flow.json` settings with hierarchical loading.
//!
//! Loads settings from (lowest to highest priority):
//! 1. `.github/prompt-flow.json`
//! 2. `prompt-flow.json` at the base path
//! 3. `PROMPT_FLOW_*` environment variables

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConfigError, ConfigResult, EnvOverrides};
use crate::context::DEFAULT_CONTEXT_FILE;
use crate::discovery::DiscoveryPatterns;
use crate::lint::Linter;

pub const SETTINGS_FILE: &str = "prompt-flow.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<DiscoveryPatterns>,

    /// Combined-context file, relative to the base path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_modes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_volatile: Option<bool>,
}

impl Settings {
    pub fn discovery_patterns(&self) -> DiscoveryPatterns {
        self.patterns.clone().unwrap_or_default()
    }

    pub fn output_file(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_CONTEXT_FILE)
    }

    pub fn skip_volatile(&self) -> bool {
        self.skip_volatile.unwrap_or(false)
    }

    pub fn linter(&self) -> Linter {
        match &self.known_modes {
            Some(modes) => Linter::new().with_known_modes(modes.clone()),
            None => Linter::new(),
        }
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.patterns.is_some() {
            self.patterns = other.patterns;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.known_modes.is_some() {
            self.known_modes = other.known_modes;
        }
        if other.skip_volatile.is_some() {
            self.skip_volatile = other.skip_volatile;
        }
    }
}

/// Settings loader that merges from multiple sources.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    settings: Settings,
    loaded_from: Vec<PathBuf>,
    env: Option<EnvOverrides>,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self {
            env: Some(EnvOverrides::new()),
            ..Default::default()
        }
    }

    /// Loader that ignores the process environment.
    pub fn without_env() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, base: &Path) -> ConfigResult<&Settings> {
        for path in [
            base.join(".github").join(SETTINGS_FILE),
            base.join(SETTINGS_FILE),
        ] {
            if path.exists() {
                self.merge_file(&path).await?;
            }
        }

        if let Some(env) = &self.env {
            env.apply(&mut self.settings)?;
        }

        Ok(&self.settings)
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn loaded_from(&self) -> &[PathBuf] {
        &self.loaded_from
    }

    async fn merge_file(&mut self, path: &Path) -> ConfigResult<()> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let file_settings: Settings =
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded settings from {}", path.display());
        self.settings.merge(file_settings);
        self.loaded_from.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.output_file(), DEFAULT_CONTEXT_FILE);
        assert!(!settings.skip_volatile());
        assert_eq!(settings.discovery_patterns(), DiscoveryPatterns::default());
        assert_eq!(settings.linter().known_modes(), ["agent", "ask", "edit"]);
    }

    #[test]
    fn test_merge_priority() {
        let mut base = Settings {
            output: Some("a.md".into()),
            skip_volatile: Some(true),
            ..Default::default()
        };
        base.merge(Settings {
            output: Some("b.md".into()),
            ..Default::default()
        });
        assert_eq!(base.output_file(), "b.md");
        assert!(base.skip_volatile());
    }

    #[tokio::test]
    async fn test_load_hierarchy() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".github")).await.unwrap();
        fs::write(
            dir.path().join(".github").join(SETTINGS_FILE),
            r#"{"output": "from-github.md", "known_modes": ["agent"]}"#,
        )
        .await
        .unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"output": "from-root.md", "patterns": {"exclude": ["drafts/**"]}}"#,
        )
        .await
        .unwrap();

        let mut loader = SettingsLoader::without_env();
        let settings = loader.load(dir.path()).await.unwrap().clone();
        assert_eq!(settings.output_file(), "from-root.md");
        assert_eq!(settings.known_modes, Some(vec!["agent".to_string()]));
        assert_eq!(settings.discovery_patterns().exclude, vec!["drafts/**"]);
        assert_eq!(loader.loaded_from().len(), 2);
    }

    #[tokio::test]
    async fn test_load_without_files() {
        let dir = tempdir().unwrap();
        let mut loader = SettingsLoader::without_env();
        let settings = loader.load(dir.path()).await.unwrap();
        assert_eq!(settings, &Settings::default());
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{not json").await.unwrap();
        let err = SettingsLoader::without_env()
            .load(dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
