//! Reads playbook markdown files into [`ProcessedDocument`]s.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml_ng::Mapping;

use super::{Applicability, DocumentKind, DocumentMetadata};
use crate::common::{bool_field, extract_frontmatter, file_name};

const PREVIEW_WIDTH: usize = 80;

/// A file read from disk with its frontmatter split off.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedDocument {
    pub path: PathBuf,
    pub metadata: DocumentMetadata,
    /// Body with the frontmatter removed.
    pub content: String,
    pub frontmatter: Option<Mapping>,
}

impl ProcessedDocument {
    pub fn parse(path: impl Into<PathBuf>, raw: &str) -> Self {
        let path = path.into();
        let parsed = extract_frontmatter(raw);
        let metadata = DocumentMetadata::from_frontmatter(&path, parsed.frontmatter.as_ref());

        Self {
            path,
            metadata,
            content: parsed.body,
            frontmatter: parsed.frontmatter,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.metadata.kind
    }

    pub fn file_name(&self) -> String {
        file_name(&self.path)
    }

    /// Length of the body in characters.
    pub fn content_length(&self) -> usize {
        self.content.chars().count()
    }

    pub fn applicability(&self) -> Applicability {
        Applicability::parse(self.metadata.apply_to.as_deref())
    }

    pub fn is_volatile(&self) -> bool {
        self.frontmatter
            .as_ref()
            .and_then(|fm| bool_field(fm, "volatile"))
            .unwrap_or(false)
    }

    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            name: self.file_name(),
            path: self.path.clone(),
            kind: self.kind(),
            apply_to: self.metadata.apply_to.clone(),
            mode: self.metadata.mode.clone(),
            model: self.metadata.model.clone(),
            description: self.metadata.description.clone(),
            content_length: self.content_length(),
            preview: preview(&self.content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub path: PathBuf,
    pub kind: DocumentKind,
    #[serde(rename = "applyTo", skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub content_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

fn preview(content: &str) -> Option<String> {
    let first = content.trim().lines().next()?;
    if first.is_empty() {
        return None;
    }
    if first.chars().count() > PREVIEW_WIDTH {
        let cut: String = first.chars().take(PREVIEW_WIDTH).collect();
        Some(format!("{}...", cut))
    } else {
        Some(first.to_string())
    }
}

/// Loader for playbook documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentReader;

impl DocumentReader {
    pub fn new() -> Self {
        Self
    }

    pub async fn read(&self, path: &Path) -> crate::Result<ProcessedDocument> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| crate::Error::io(path, e))?;
        Ok(ProcessedDocument::parse(path, &raw))
    }
}
