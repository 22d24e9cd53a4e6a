//! Runs the steps of a [`FlowConfig`] against a base directory.

use std::path::PathBuf;

use super::report::DEFAULT_FLOW_REPORT_NAME;
use super::{FlowConfig, FlowReport, PlannedStep, StepOutcome, StepStatus};
use crate::context::combine_prompts;
use crate::discovery::{Discovery, DiscoveryPatterns};
use crate::document::{DocumentKind, DocumentReader, ProcessedDocument};

pub const REQUIRED_MISSING: &str = "File not found";
pub const OPTIONAL_MISSING: &str = "Optional file not found";

pub struct FlowExecutor {
    config: FlowConfig,
    discovery: Discovery,
    reader: DocumentReader,
    skip_volatile: bool,
}

impl FlowExecutor {
    pub fn new(base: impl Into<PathBuf>, config: FlowConfig) -> Self {
        let patterns = config.discovery_patterns(DiscoveryPatterns::default());
        Self {
            discovery: Discovery::new(base).with_patterns(patterns),
            config,
            reader: DocumentReader::new(),
            skip_volatile: false,
        }
    }

    /// Use `patterns` (e.g. from settings) as the base the flow overrides.
    pub fn with_patterns(mut self, patterns: DiscoveryPatterns) -> Self {
        let patterns = self.config.discovery_patterns(patterns);
        self.discovery = self.discovery.with_patterns(patterns);
        self
    }

    pub fn with_skip_volatile(mut self, skip: bool) -> Self {
        self.skip_volatile = skip;
        self
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    /// Steps that would run, without touching the filesystem.
    pub fn plan(&self) -> Vec<PlannedStep> {
        self.config
            .flow
            .iter()
            .enumerate()
            .map(|(i, step)| PlannedStep {
                index: i + 1,
                name: step.display_name(i + 1),
                file: if step.file.is_empty() {
                    "N/A".to_string()
                } else {
                    step.file.clone()
                },
            })
            .collect()
    }

    pub async fn execute(&self) -> crate::Result<FlowReport> {
        if !self.config.has_steps() {
            tracing::info!("No flow steps configured, reading all documents");
            return self.execute_default().await;
        }

        tracing::info!(
            version = %self.config.version,
            steps = self.config.flow.len(),
            "Executing flow {}",
            self.config.name
        );

        let mut report = self.empty_report(self.config.name.clone());

        for (i, step) in self.config.flow.iter().enumerate() {
            let name = step.display_name(i + 1);
            let full_path = self.discovery.resolve(&step.file);
            tracing::debug!(step = %name, file = %step.file, "Running step {}", i + 1);

            let status = if !full_path.exists() {
                if step.required {
                    tracing::warn!("Required file not found: {}", step.file);
                    StepStatus::Error {
                        error: REQUIRED_MISSING.to_string(),
                    }
                } else {
                    tracing::debug!("Optional file not found: {}", step.file);
                    StepStatus::Skipped {
                        reason: OPTIONAL_MISSING.to_string(),
                    }
                }
            } else {
                match self.reader.read(&full_path).await {
                    Ok(document) => {
                        let content_length = document.content_length();
                        report.record(name.clone(), document);
                        StepStatus::Success { content_length }
                    }
                    Err(e) => {
                        tracing::warn!("Step {} failed: {}", name, e);
                        StepStatus::Error {
                            error: e.to_string(),
                        }
                    }
                }
            };

            report.steps.push(StepOutcome {
                step: name,
                step_type: step.type_label().to_string(),
                file: step.file.clone(),
                status,
            });
        }

        let prompts: Vec<ProcessedDocument> = report
            .files
            .iter()
            .map(|f| f.document.clone())
            .filter(|d| d.kind() == DocumentKind::Prompt)
            .collect();
        report.combined_context = self.combine(&prompts);

        tracing::info!(
            succeeded = report.succeeded(),
            skipped = report.skipped(),
            failed = report.failed(),
            "Flow execution completed"
        );
        Ok(report)
    }

    async fn execute_default(&self) -> crate::Result<FlowReport> {
        let catalog = self.discovery.read_all().await?;
        let mut report = self.empty_report(DEFAULT_FLOW_REPORT_NAME.to_string());
        report.combined_context = self.combine(&catalog.prompts);
        report.catalog = Some(catalog);
        Ok(report)
    }

    fn combine(&self, prompts: &[ProcessedDocument]) -> String {
        if !self.skip_volatile {
            return combine_prompts(prompts);
        }
        let kept: Vec<_> = prompts
            .iter()
            .filter(|p| {
                let volatile = p.is_volatile();
                if volatile {
                    tracing::debug!("Skipping volatile prompt {}", p.path.display());
                }
                !volatile
            })
            .cloned()
            .collect();
        combine_prompts(&kept)
    }

    fn empty_report(&self, flow_name: String) -> FlowReport {
        FlowReport {
            flow_name,
            execution: self.config.execution.clone(),
            config: self.config.config.clone(),
            steps: Vec::new(),
            files: Vec::new(),
            catalog: None,
            combined_context: String::new(),
        }
    }
}
