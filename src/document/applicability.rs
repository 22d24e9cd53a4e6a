//! `applyTo` scoping for instruction documents.

use serde::{Deserialize, Serialize};

use crate::common::PathMatched;

const GLOBAL_PATTERNS: [&str; 2] = ["**", "**/*"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "patterns", rename_all = "snake_case")]
pub enum Applicability {
    /// No `applyTo` declared; matches nothing.
    #[default]
    Undeclared,
    Global,
    Patterns(Vec<String>),
}

impl Applicability {
    pub fn parse(apply_to: Option<&str>) -> Self {
        let patterns = apply_to.map(split_patterns).unwrap_or_default();

        if patterns.is_empty() {
            Self::Undeclared
        } else if patterns.iter().any(|p| GLOBAL_PATTERNS.contains(&p.as_str())) {
            Self::Global
        } else {
            Self::Patterns(patterns)
        }
    }
}

impl PathMatched for Applicability {
    fn path_patterns(&self) -> Option<&[String]> {
        match self {
            Self::Undeclared => Some(&[]),
            Self::Global => None,
            Self::Patterns(p) => Some(p),
        }
    }
}

/// Split a comma-separated `applyTo` value into trimmed, non-empty globs.
pub fn split_patterns(apply_to: &str) -> Vec<String> {
    apply_to
        .split(',')
        .map(|s| s.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_states() {
        assert_eq!(Applicability::parse(None), Applicability::Undeclared);
        assert_eq!(Applicability::parse(Some("  ")), Applicability::Undeclared);
        assert_eq!(Applicability::parse(Some("**")), Applicability::Global);
        assert_eq!(
            Applicability::parse(Some("src/**/*.py, **/*")),
            Applicability::Global
        );
        assert_eq!(
            Applicability::parse(Some("src/**/*.py, tests/**/*.py")),
            Applicability::Patterns(vec!["src/**/*.py".into(), "tests/**/*.py".into()])
        );
    }

    #[test]
    fn test_split_patterns() {
        assert_eq!(
            split_patterns("'**/*.ts', \"**/*.tsx\",, "),
            vec!["**/*.ts".to_string(), "**/*.tsx".to_string()]
        );
    }

    #[test]
    fn test_matching() {
        let undeclared = Applicability::Undeclared;
        assert!(!undeclared.matches_path(Path::new("src/app.py")));

        let global = Applicability::Global;
        assert!(global.matches_path(Path::new("anything/at/all.txt")));

        let python = Applicability::parse(Some("**/*.py"));
        assert!(python.matches_path(Path::new("pkg/module.py")));
        assert!(!python.matches_path(Path::new("pkg/module.rs")));
    }
}
