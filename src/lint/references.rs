//! Instruction references in prompt bodies, extracted with Markdown-aware parsing.
//!
//! Fenced code blocks and inline code spans are skipped so that snippets
//! quoting file names do not count as references.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Extracts `*.instructions.md` references from Markdown content.
pub struct ReferenceExtractor {
    reference_regex: Regex,
    code_block_regex: Regex,
    inline_code_regex: Regex,
}

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self {
            // Path-like token ending in .instructions.md, e.g. `../x/review.instructions.md`.
            // Group 1 catches a URL scheme so linked web pages can be dropped.
            reference_regex: Regex::new(
                r"(?i)([a-z][a-z0-9+.\-]*:)?([\w./\-]*[\w\-]\.instructions\.md)\b",
            )
            .expect("Invalid regex pattern"),
            code_block_regex: Regex::new(r"(?s)(?:```|~~~).*?(?:```|~~~)").expect("Invalid regex"),
            inline_code_regex: Regex::new(r"`[^`]+`").expect("Invalid regex"),
        }
    }

    /// Unique references in order of first appearance.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let without_fenced = self.code_block_regex.replace_all(content, " ");
        let clean = self.inline_code_regex.replace_all(&without_fenced, " ");

        let mut seen = HashSet::new();
        self.reference_regex
            .captures_iter(&clean)
            .filter(|c| c.get(1).is_none())
            .filter_map(|c| c.get(2))
            .map(|m| m.as_str().trim_start_matches("./").to_string())
            .filter(|r| !r.starts_with("//"))
            .filter(|r| seen.insert(r.clone()))
            .collect()
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a reference might live on disk: next to the prompt, then under `base`.
pub fn candidate_paths(reference: &str, prompt_path: &Path, base: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = prompt_path.parent() {
        candidates.push(dir.join(reference));
    }
    candidates.push(base.join(reference));
    candidates
}

/// File-name component of a reference.
pub fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
