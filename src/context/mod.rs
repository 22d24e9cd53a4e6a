//! Combined prompt context: every prompt body, headed by its metadata,
//! in one markdown file an assistant can read in a single pass.

use std::path::Path;

use crate::document::ProcessedDocument;

pub const SEPARATOR_WIDTH: usize = 50;

/// Rule printed after each prompt body.
pub const PROMPT_SEPARATOR: &str = "──────────────────────────────────────────────────";

pub const DEFAULT_CONTEXT_FILE: &str = "combined_prompt_context.md";

/// Build the header block for the `index`-th (1-based) prompt.
pub fn prompt_header(index: usize, prompt: &ProcessedDocument) -> String {
    let mut header = format!(
        "# Prompt {}: {}\n# Path: {}\n",
        index,
        prompt.file_name(),
        prompt.path.display()
    );

    let meta = &prompt.metadata;
    for (label, value) in [
        ("Description", &meta.description),
        ("Mode", &meta.mode),
        ("Model", &meta.model),
    ] {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            header.push_str(&format!("# {}: {}\n", label, value));
        }
    }

    header.push('\n');
    header
}

/// Concatenate prompt documents into one context string.
///
/// Each prompt contributes its header, its body, and a separator line;
/// all parts are joined with newlines. No prompts yields an empty string.
pub fn combine_prompts(prompts: &[ProcessedDocument]) -> String {
    let mut parts = Vec::with_capacity(prompts.len() * 3);

    for (i, prompt) in prompts.iter().enumerate() {
        parts.push(prompt_header(i + 1, prompt));
        parts.push(prompt.content.clone());
        parts.push(format!("\n{}\n", PROMPT_SEPARATOR));
    }

    parts.join("\n")
}

/// Write combined context to disk, creating parent directories.
pub async fn write_context(path: &Path, context: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| crate::Error::io(parent, e))?;
    }
    tokio::fs::write(path, context)
        .await
        .map_err(|e| crate::Error::io(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
