use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LintRule {
    MissingApplyTo,
    InvalidApplyTo,
    MissingFrontmatter,
    MissingDescription,
    DanglingReference,
    UnknownMode,
}

impl LintRule {
    pub const ALL: [LintRule; 6] = [
        Self::MissingApplyTo,
        Self::InvalidApplyTo,
        Self::MissingFrontmatter,
        Self::MissingDescription,
        Self::DanglingReference,
        Self::UnknownMode,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::MissingApplyTo => "missing-apply-to",
            Self::InvalidApplyTo => "invalid-apply-to",
            Self::MissingFrontmatter => "missing-frontmatter",
            Self::MissingDescription => "missing-description",
            Self::DanglingReference => "dangling-reference",
            Self::UnknownMode => "unknown-mode",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::MissingApplyTo | Self::InvalidApplyTo | Self::DanglingReference => {
                Severity::Error
            }
            Self::MissingFrontmatter | Self::MissingDescription | Self::UnknownMode => {
                Severity::Warning
            }
        }
    }
}

impl std::fmt::Display for LintRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub rule: LintRule,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<PathBuf>, rule: LintRule, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            rule,
            severity: rule.severity(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.path.display(),
            self.severity,
            self.rule,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_ids_match_serde_names() {
        for rule in LintRule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.id()));
            assert_eq!(rule.to_string(), rule.id());
        }
    }

    #[test]
    fn test_severity() {
        assert_eq!(LintRule::DanglingReference.severity(), Severity::Error);
        assert_eq!(LintRule::MissingDescription.severity(), Severity::Warning);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            "a.instructions.md",
            LintRule::MissingApplyTo,
            "instruction has no applyTo",
        );
        assert!(diag.is_error());
        assert_eq!(
            diag.to_string(),
            "a.instructions.md: error [missing-apply-to] instruction has no applyTo"
        );
    }
}
