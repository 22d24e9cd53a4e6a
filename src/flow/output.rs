//! Saving a run's combined context or JSON report.

use std::path::{Path, PathBuf};

use super::{FlowReport, OutputFormat, OutputSettings};
use crate::context::write_context;

/// Where and how a run writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl OutputTarget {
    /// Resolve the output file for a run; `None` when output is disabled.
    ///
    /// Precedence: `override_path`, then the flow's `output.path`, then
    /// `combined_fallback` (combined format only), then the format default.
    /// Everything but `override_path` is relative to `base`.
    pub fn resolve(
        base: &Path,
        output: &OutputSettings,
        override_path: Option<&Path>,
        combined_fallback: Option<&str>,
    ) -> Option<Self> {
        let format = output.format;
        let path = match (override_path, format) {
            (_, OutputFormat::Disabled) => return None,
            (Some(path), _) => path.to_path_buf(),
            (None, OutputFormat::Combined) if output.path.is_none() => match combined_fallback {
                Some(file) => base.join(file),
                None => output.resolved_path(base)?,
            },
            (None, _) => output.resolved_path(base)?,
        };
        Some(Self { format, path })
    }

    /// Write the report's output. Returns the path written, or `None` when
    /// there was nothing to write.
    pub async fn save(&self, report: &FlowReport) -> crate::Result<Option<&Path>> {
        let text = match self.format {
            OutputFormat::Disabled => return Ok(None),
            OutputFormat::Combined if report.combined_context.is_empty() => {
                tracing::info!("No prompts to combine, nothing written");
                return Ok(None);
            }
            OutputFormat::Combined => report.combined_context.clone(),
            OutputFormat::Json => serde_json::to_string_pretty(&report.to_json())?,
        };
        write_context(&self.path, &text).await?;
        Ok(Some(&self.path))
    }
}
