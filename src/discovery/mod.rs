//! Locating and reading playbook documents under a base directory.

mod catalog;
mod finder;
mod patterns;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use catalog::{CatalogSummary, DocumentCatalog};
pub use finder::find_files;
pub use patterns::DiscoveryPatterns;

use crate::common::{PathMatched, relative_to};
use crate::document::{DocumentKind, DocumentReader, ProcessedDocument};

#[derive(Debug, Clone)]
pub struct Discovery {
    base: PathBuf,
    patterns: DiscoveryPatterns,
    reader: DocumentReader,
}

impl Discovery {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            patterns: DiscoveryPatterns::default(),
            reader: DocumentReader::new(),
        }
    }

    pub fn with_patterns(mut self, patterns: DiscoveryPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base.join(path)
    }

    /// Glob for files off the async runtime.
    pub async fn find(&self, patterns: &[String]) -> crate::Result<Vec<PathBuf>> {
        let base = self.base.clone();
        let patterns = patterns.to_vec();
        let exclude = self.patterns.exclude.clone();

        tokio::task::spawn_blocking(move || find_files(&base, &patterns, &exclude))
            .await
            .map_err(|e| crate::Error::Internal(format!("Discovery task failed: {}", e)))?
    }

    pub async fn read_instructions(&self) -> crate::Result<Vec<ProcessedDocument>> {
        let paths = self.find(&self.patterns.instructions).await?;
        Ok(self
            .read_paths(&paths)
            .await
            .into_iter()
            .filter(|d| d.kind() == DocumentKind::Instruction)
            .collect())
    }

    pub async fn read_prompts(&self) -> crate::Result<Vec<ProcessedDocument>> {
        let paths = self.find(&self.patterns.prompts).await?;
        Ok(self
            .read_paths(&paths)
            .await
            .into_iter()
            .filter(|d| d.kind() == DocumentKind::Prompt)
            .collect())
    }

    /// Read instructions, prompts, and the remaining markdown documents.
    pub async fn read_all(&self) -> crate::Result<DocumentCatalog> {
        let instructions = self.read_instructions().await?;
        let mut seen: HashSet<PathBuf> = instructions.iter().map(|d| d.path.clone()).collect();

        let prompts: Vec<_> = self
            .read_prompts()
            .await?
            .into_iter()
            .filter(|d| !seen.contains(&d.path))
            .collect();
        seen.extend(prompts.iter().map(|d| d.path.clone()));

        let doc_paths: Vec<_> = self
            .find(&self.patterns.documents)
            .await?
            .into_iter()
            .filter(|p| !seen.contains(p))
            .collect();
        let documents = self.read_paths(&doc_paths).await;

        tracing::debug!(
            instructions = instructions.len(),
            prompts = prompts.len(),
            documents = documents.len(),
            "Catalog loaded from {}",
            self.base.display()
        );

        Ok(DocumentCatalog {
            instructions,
            prompts,
            documents,
        })
    }

    /// Read specific files, relative to the base path, keeping the given order.
    pub async fn read_in_order<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<ProcessedDocument> {
        let resolved: Vec<_> = paths.iter().map(|p| self.resolve(p)).collect();
        self.read_paths(&resolved).await
    }

    /// Instruction documents whose `applyTo` covers `target`.
    pub async fn instructions_for(&self, target: &Path) -> crate::Result<Vec<ProcessedDocument>> {
        let rel = relative_to(target, &self.base);
        Ok(self
            .read_instructions()
            .await?
            .into_iter()
            .filter(|d| d.applicability().matches_path(&rel))
            .collect())
    }

    async fn read_paths(&self, paths: &[PathBuf]) -> Vec<ProcessedDocument> {
        let mut docs = Vec::with_capacity(paths.len());
        for path in paths {
            match self.reader.read(path).await {
                Ok(doc) => docs.push(doc),
                Err(e) => tracing::warn!("Could not read {}: {}", path.display(), e),
            }
        }
        docs
    }
}
