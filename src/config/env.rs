//! Environment variable overrides.
//!
//! Variables are read once when overrides are applied; they are never
//! written back.

use super::{ConfigError, ConfigResult, Settings};

pub const ENV_PREFIX: &str = "PROMPT_FLOW_";

/// Read-only `PROMPT_FLOW_*` environment overrides.
#[derive(Debug, Clone)]
pub struct EnvOverrides {
    prefix: String,
}

impl EnvOverrides {
    pub fn new() -> Self {
        Self::prefixed(ENV_PREFIX)
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Full environment variable name for a settings key.
    pub fn env_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase().replace('.', "_"))
    }

    pub fn apply(&self, settings: &mut Settings) -> ConfigResult<()> {
        self.apply_with(settings, |name| std::env::var(name).ok())
    }

    /// Apply overrides using `lookup` in place of the process environment.
    pub fn apply_with(
        &self,
        settings: &mut Settings,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<()> {
        if let Some(output) = lookup(&self.env_key("output")).filter(|v| !v.is_empty()) {
            settings.output = Some(output);
        }

        let key = self.env_key("skip_volatile");
        if let Some(raw) = lookup(&key) {
            settings.skip_volatile = Some(parse_bool(&raw).ok_or_else(|| {
                ConfigError::InvalidValue {
                    key: key.clone(),
                    message: format!("expected true or false, got '{}'", raw),
                }
            })?);
        }

        Ok(())
    }
}

impl Default for EnvOverrides {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_env_key_conversion() {
        let env = EnvOverrides::new();
        assert_eq!(env.env_key("skip_volatile"), "PROMPT_FLOW_SKIP_VOLATILE");
        assert_eq!(env.env_key("output"), "PROMPT_FLOW_OUTPUT");
        assert_eq!(EnvOverrides::prefixed("PF_").env_key("output"), "PF_OUTPUT");
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        EnvOverrides::new()
            .apply_with(
                &mut settings,
                lookup(&[
                    ("PROMPT_FLOW_OUTPUT", "ctx/all.md"),
                    ("PROMPT_FLOW_SKIP_VOLATILE", "Yes"),
                ]),
            )
            .unwrap();
        assert_eq!(settings.output.as_deref(), Some("ctx/all.md"));
        assert_eq!(settings.skip_volatile, Some(true));
    }

    #[test]
    fn test_absent_vars_leave_settings() {
        let mut settings = Settings {
            output: Some("keep.md".into()),
            ..Default::default()
        };
        EnvOverrides::new()
            .apply_with(&mut settings, lookup(&[("PROMPT_FLOW_OUTPUT", "")]))
            .unwrap();
        assert_eq!(settings.output.as_deref(), Some("keep.md"));
        assert_eq!(settings.skip_volatile, None);
    }

    #[test]
    fn test_invalid_bool() {
        let mut settings = Settings::default();
        let err = EnvOverrides::new()
            .apply_with(
                &mut settings,
                lookup(&[("PROMPT_FLOW_SKIP_VOLATILE", "sometimes")]),
            )
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
