use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml_ng::Mapping;

use super::DocumentKind;
use crate::common::string_field;

/// Metadata extracted from a document's frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub kind: DocumentKind,
    #[serde(default, rename = "applyTo", skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub raw: Option<Mapping>,
}

impl DocumentMetadata {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn from_frontmatter(path: &Path, frontmatter: Option<&Mapping>) -> Self {
        let kind = DocumentKind::classify(path, frontmatter);

        let Some(fm) = frontmatter.filter(|fm| !fm.is_empty()) else {
            return Self::new(kind);
        };

        Self {
            kind,
            apply_to: string_field(fm, "applyTo")
                .filter(|s| !s.is_empty())
                .or_else(|| string_field(fm, "applyto")),
            mode: string_field(fm, "mode"),
            model: string_field(fm, "model"),
            description: string_field(fm, "description"),
            raw: Some(fm.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::extract_frontmatter;

    fn metadata(name: &str, content: &str) -> DocumentMetadata {
        let doc = extract_frontmatter(content);
        DocumentMetadata::from_frontmatter(Path::new(name), doc.frontmatter.as_ref())
    }

    #[test]
    fn test_prompt_metadata() {
        let meta = metadata(
            "summarize_logic.prompt.md",
            "---\nmode: agent\nmodel: Claude Sonnet 4\ndescription: Summarize module logic\n---\nBody",
        );
        assert_eq!(meta.kind, DocumentKind::Prompt);
        assert_eq!(meta.mode.as_deref(), Some("agent"));
        assert_eq!(meta.model.as_deref(), Some("Claude Sonnet 4"));
        assert_eq!(meta.description.as_deref(), Some("Summarize module logic"));
        assert!(meta.apply_to.is_none());
        assert!(meta.raw.is_some());
    }

    #[test]
    fn test_lowercase_apply_to_fallback() {
        let meta = metadata("guide.md", "---\napplyto: '**/*.py'\n---\n");
        assert_eq!(meta.kind, DocumentKind::Instruction);
        assert_eq!(meta.apply_to.as_deref(), Some("**/*.py"));
    }

    #[test]
    fn test_apply_to_sequence() {
        let meta = metadata("web.instructions.md", "---\napplyTo: ['**/*.ts', '**/*.tsx']\n---\n");
        assert_eq!(meta.apply_to.as_deref(), Some("**/*.ts,**/*.tsx"));
    }

    #[test]
    fn test_no_frontmatter_sets_only_kind() {
        let meta = metadata("review.prompt.md", "Just a prompt");
        assert_eq!(meta, DocumentMetadata::new(DocumentKind::Prompt));
    }

    #[test]
    fn test_empty_frontmatter_sets_only_kind() {
        let meta = metadata("notes.md", "---\n---\nBody");
        assert_eq!(meta.kind, DocumentKind::Document);
        assert!(meta.raw.is_none());
    }
}
