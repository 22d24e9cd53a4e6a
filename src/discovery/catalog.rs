use serde::Serialize;

use crate::document::{DocumentSummary, ProcessedDocument};

/// Every document of a playbook, grouped by kind.
#[derive(Debug, Clone, Default)]
pub struct DocumentCatalog {
    pub instructions: Vec<ProcessedDocument>,
    pub prompts: Vec<ProcessedDocument>,
    pub documents: Vec<ProcessedDocument>,
}

impl DocumentCatalog {
    /// Categories in display order.
    pub fn categories(&self) -> [(&'static str, &[ProcessedDocument]); 3] {
        [
            ("instructions", &self.instructions),
            ("prompts", &self.prompts),
            ("documents", &self.documents),
        ]
    }

    pub fn total(&self) -> usize {
        self.instructions.len() + self.prompts.len() + self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessedDocument> {
        self.instructions
            .iter()
            .chain(&self.prompts)
            .chain(&self.documents)
    }

    pub fn find_instruction(&self, name: &str) -> Option<&ProcessedDocument> {
        self.instructions
            .iter()
            .find(|d| d.file_name().eq_ignore_ascii_case(name))
    }

    pub fn summaries(&self) -> CatalogSummary {
        let collect = |docs: &[ProcessedDocument]| docs.iter().map(|d| d.summary()).collect();
        CatalogSummary {
            instructions: collect(&self.instructions),
            prompts: collect(&self.prompts),
            documents: collect(&self.documents),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub instructions: Vec<DocumentSummary>,
    pub prompts: Vec<DocumentSummary>,
    pub documents: Vec<DocumentSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> DocumentCatalog {
        DocumentCatalog {
            instructions: vec![ProcessedDocument::parse(
                "a/test.instructions.md",
                "---\napplyTo: '**'\n---\nx",
            )],
            prompts: vec![ProcessedDocument::parse("a/test.prompt.md", "y")],
            documents: vec![],
        }
    }

    #[test]
    fn test_categories_order() {
        let catalog = catalog();
        let names: Vec<_> = catalog.categories().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["instructions", "prompts", "documents"]);
        assert_eq!(catalog.total(), 2);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_find_instruction() {
        let catalog = catalog();
        assert!(catalog.find_instruction("test.instructions.md").is_some());
        assert!(catalog.find_instruction("other.instructions.md").is_none());
    }

    #[test]
    fn test_find_instruction_ignores_case() {
        let catalog = catalog();
        assert!(catalog.find_instruction("Test.INSTRUCTIONS.md").is_some());
    }

    #[test]
    fn test_summaries_serialize() {
        let json = serde_json::to_value(catalog().summaries()).unwrap();
        assert_eq!(json["instructions"][0]["kind"], "instruction");
        assert_eq!(json["instructions"][0]["applyTo"], "**");
        assert_eq!(json["prompts"][0]["content_length"], 1);
    }
}
