use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Mapping;

use crate::common::{has_key, is_instruction_file, is_prompt_file};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Prompt,
    Instruction,
    #[default]
    Document,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => write!(f, "prompt"),
            Self::Instruction => write!(f, "instruction"),
            Self::Document => write!(f, "document"),
        }
    }
}

impl DocumentKind {
    /// Classify a file by name first, then by frontmatter keys.
    pub fn classify(path: &Path, frontmatter: Option<&Mapping>) -> Self {
        if is_instruction_file(path) {
            return Self::Instruction;
        }
        if is_prompt_file(path) {
            return Self::Prompt;
        }

        match frontmatter {
            Some(fm) if has_key(fm, "applyTo") || has_key(fm, "applyto") => Self::Instruction,
            Some(fm) if has_key(fm, "mode") || has_key(fm, "model") => Self::Prompt,
            _ => Self::Document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::extract_frontmatter;

    fn fm(yaml: &str) -> Mapping {
        extract_frontmatter(&format!("---\n{}\n---\n", yaml))
            .frontmatter
            .unwrap()
    }

    #[test]
    fn test_classify_by_name() {
        assert_eq!(
            DocumentKind::classify(Path::new("a/review.instructions.md"), None),
            DocumentKind::Instruction
        );
        assert_eq!(
            DocumentKind::classify(Path::new("a/Review.PROMPT.md"), None),
            DocumentKind::Prompt
        );
        assert_eq!(
            DocumentKind::classify(Path::new("README.md"), None),
            DocumentKind::Document
        );
    }

    #[test]
    fn test_name_wins_over_frontmatter() {
        let prompt_fm = fm("mode: agent");
        assert_eq!(
            DocumentKind::classify(Path::new("x.instructions.md"), Some(&prompt_fm)),
            DocumentKind::Instruction
        );
    }

    #[test]
    fn test_classify_by_frontmatter() {
        assert_eq!(
            DocumentKind::classify(Path::new("guide.md"), Some(&fm("applyTo: '**'"))),
            DocumentKind::Instruction
        );
        assert_eq!(
            DocumentKind::classify(Path::new("guide.md"), Some(&fm("applyto: '*.rs'"))),
            DocumentKind::Instruction
        );
        assert_eq!(
            DocumentKind::classify(Path::new("task.md"), Some(&fm("model: GPT-4o"))),
            DocumentKind::Prompt
        );
        assert_eq!(
            DocumentKind::classify(Path::new("notes.md"), Some(&fm("title: Notes"))),
            DocumentKind::Document
        );
    }

    #[test]
    fn test_apply_to_checked_before_mode() {
        let both = fm("applyTo: '**'\nmode: agent");
        assert_eq!(
            DocumentKind::classify(Path::new("both.md"), Some(&both)),
            DocumentKind::Instruction
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&DocumentKind::Instruction).unwrap();
        assert_eq!(json, "\"instruction\"");
        let parsed: DocumentKind = serde_json::from_str("\"prompt\"").unwrap();
        assert_eq!(parsed, DocumentKind::Prompt);
    }
}
