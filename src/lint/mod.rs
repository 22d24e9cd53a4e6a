//! Hygiene checks for a playbook: every instruction declares where it
//! applies, and every instruction a prompt names actually exists.

mod references;
mod rules;

use std::path::Path;

use serde::Serialize;

pub use references::{ReferenceExtractor, candidate_paths, reference_name};
pub use rules::{Diagnostic, LintRule, Severity};

use crate::common::{is_instruction_file, is_prompt_file};
use crate::discovery::DocumentCatalog;
use crate::document::{DocumentKind, ProcessedDocument, split_patterns};

pub const DEFAULT_KNOWN_MODES: [&str; 3] = ["agent", "ask", "edit"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct LintReport {
    pub diagnostics: Vec<Diagnostic>,
    pub files_checked: usize,
}

impl LintReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn errors(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn warnings(&self) -> usize {
        self.diagnostics.len() - self.errors()
    }

    pub fn by_rule(&self, rule: LintRule) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

pub struct Linter {
    known_modes: Vec<String>,
    extractor: ReferenceExtractor,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter {
    pub fn new() -> Self {
        Self {
            known_modes: DEFAULT_KNOWN_MODES.iter().map(|m| m.to_string()).collect(),
            extractor: ReferenceExtractor::new(),
        }
    }

    pub fn with_known_modes(mut self, modes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.known_modes = modes.into_iter().map(Into::into).collect();
        self
    }

    pub fn known_modes(&self) -> &[String] {
        &self.known_modes
    }

    pub fn check(&self, catalog: &DocumentCatalog, base: &Path) -> LintReport {
        let mut diagnostics = Vec::new();

        for doc in catalog.iter() {
            self.check_frontmatter(doc, &mut diagnostics);
            match doc.kind() {
                DocumentKind::Instruction => self.check_instruction(doc, &mut diagnostics),
                DocumentKind::Prompt => {
                    self.check_prompt(doc, catalog, base, &mut diagnostics)
                }
                DocumentKind::Document => {}
            }
        }

        diagnostics.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.rule.id().cmp(b.rule.id())));
        tracing::debug!(
            files = catalog.total(),
            diagnostics = diagnostics.len(),
            "Lint finished"
        );

        LintReport {
            diagnostics,
            files_checked: catalog.total(),
        }
    }

    fn check_frontmatter(&self, doc: &ProcessedDocument, out: &mut Vec<Diagnostic>) {
        let named = is_instruction_file(&doc.path) || is_prompt_file(&doc.path);
        if named && doc.frontmatter.is_none() {
            out.push(Diagnostic::new(
                &doc.path,
                LintRule::MissingFrontmatter,
                "no parsable YAML frontmatter",
            ));
        }
    }

    fn check_instruction(&self, doc: &ProcessedDocument, out: &mut Vec<Diagnostic>) {
        let apply_to = doc.metadata.apply_to.as_deref().unwrap_or("");
        let patterns = split_patterns(apply_to);

        if patterns.is_empty() {
            out.push(Diagnostic::new(
                &doc.path,
                LintRule::MissingApplyTo,
                "instruction does not declare a non-empty applyTo pattern",
            ));
            return;
        }

        for pattern in patterns {
            if let Err(e) = glob::Pattern::new(&pattern) {
                out.push(Diagnostic::new(
                    &doc.path,
                    LintRule::InvalidApplyTo,
                    format!("applyTo pattern '{}' is not a valid glob: {}", pattern, e),
                ));
            }
        }
    }

    fn check_prompt(
        &self,
        doc: &ProcessedDocument,
        catalog: &DocumentCatalog,
        base: &Path,
        out: &mut Vec<Diagnostic>,
    ) {
        if doc
            .metadata
            .description
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
        {
            out.push(Diagnostic::new(
                &doc.path,
                LintRule::MissingDescription,
                "prompt has no description",
            ));
        }

        if let Some(mode) = doc.metadata.mode.as_deref()
            && !self.known_modes.iter().any(|m| m == mode)
        {
            out.push(Diagnostic::new(
                &doc.path,
                LintRule::UnknownMode,
                format!(
                    "mode '{}' is not one of: {}",
                    mode,
                    self.known_modes.join(", ")
                ),
            ));
        }

        for reference in self.extractor.extract(&doc.content) {
            if !reference_exists(&reference, doc, catalog, base) {
                out.push(Diagnostic::new(
                    &doc.path,
                    LintRule::DanglingReference,
                    format!("referenced instruction '{}' does not exist", reference),
                ));
            }
        }
    }
}

fn reference_exists(
    reference: &str,
    prompt: &ProcessedDocument,
    catalog: &DocumentCatalog,
    base: &Path,
) -> bool {
    catalog.find_instruction(reference_name(reference)).is_some()
        || candidate_paths(reference, &prompt.path, base)
            .iter()
            .any(|p| p.is_file())
}
