use serde::Serialize;
use serde_yaml_ng::Mapping;

use super::ExecutionSettings;
use crate::discovery::DocumentCatalog;
use crate::document::{DocumentSummary, ProcessedDocument};

pub const DEFAULT_FLOW_REPORT_NAME: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StepStatus {
    Success { content_length: usize },
    Skipped { reason: String },
    Error { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub file: String,
    #[serde(flatten)]
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, StepStatus::Success { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.status, StepStatus::Skipped { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, StepStatus::Error { .. })
    }
}

/// A step's name paired with the document it produced.
#[derive(Debug, Clone)]
pub struct StepDocument {
    pub step: String,
    pub document: ProcessedDocument,
}

/// A step listed by a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    pub index: usize,
    pub name: String,
    pub file: String,
}

#[derive(Debug, Clone)]
pub struct FlowReport {
    pub flow_name: String,
    pub execution: ExecutionSettings,
    /// The flow's free-form `config` mapping.
    pub config: Mapping,
    pub steps: Vec<StepOutcome>,
    /// Documents keyed by step name, in first-seen step order.
    pub files: Vec<StepDocument>,
    /// Populated only for the default (stepless) flow.
    pub catalog: Option<DocumentCatalog>,
    pub combined_context: String,
}

impl FlowReport {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.is_success()).count()
    }

    pub fn skipped(&self) -> usize {
        self.steps.iter().filter(|s| s.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.iter().filter(|s| s.is_error()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn is_default_flow(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn document(&self, step: &str) -> Option<&ProcessedDocument> {
        self.files
            .iter()
            .find(|f| f.step == step)
            .map(|f| &f.document)
    }

    /// Insert or replace the document recorded for `step`.
    pub(crate) fn record(&mut self, step: String, document: ProcessedDocument) {
        match self.files.iter_mut().find(|f| f.step == step) {
            Some(existing) => existing.document = document,
            None => self.files.push(StepDocument { step, document }),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let files: serde_json::Map<String, serde_json::Value> = self
            .files
            .iter()
            .map(|f| (f.step.clone(), summary_json(&f.document.summary())))
            .collect();

        serde_json::json!({
            "flow_name": self.flow_name,
            "execution": self.execution,
            "config": serde_json::to_value(&self.config).unwrap_or(serde_json::Value::Null),
            "steps_executed": self.steps,
            "files_processed": files,
            "catalog": self.catalog.as_ref().map(|c| c.summaries()),
            "summary": {
                "succeeded": self.succeeded(),
                "skipped": self.skipped(),
                "failed": self.failed(),
            },
            "combined_context": self.combined_context,
        })
    }
}

fn summary_json(summary: &DocumentSummary) -> serde_json::Value {
    serde_json::to_value(summary).unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: StepStatus) -> StepOutcome {
        StepOutcome {
            step: "s".into(),
            step_type: "prompt".into(),
            file: "f.md".into(),
            status,
        }
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(outcome(StepStatus::Success { content_length: 12 })).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["content_length"], 12);
        assert_eq!(json["type"], "prompt");

        let json = serde_json::to_value(outcome(StepStatus::Skipped {
            reason: "Optional file not found".into(),
        }))
        .unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "Optional file not found");
    }

    #[test]
    fn test_counts_and_record() {
        let mut report = FlowReport {
            flow_name: "f".into(),
            execution: ExecutionSettings::default(),
            config: Mapping::new(),
            steps: vec![
                outcome(StepStatus::Success { content_length: 1 }),
                outcome(StepStatus::Error {
                    error: "File not found".into(),
                }),
                outcome(StepStatus::Skipped {
                    reason: "Optional file not found".into(),
                }),
            ],
            files: Vec::new(),
            catalog: None,
            combined_context: String::new(),
        };
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(report.has_failures());

        report.record("a".into(), ProcessedDocument::parse("one.md", "1"));
        report.record("b".into(), ProcessedDocument::parse("two.md", "2"));
        report.record("a".into(), ProcessedDocument::parse("three.md", "3"));
        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].step, "a");
        assert_eq!(report.document("a").unwrap().content, "3");

        let json = report.to_json();
        assert_eq!(json["summary"]["failed"], 1);
        assert_eq!(json["files_processed"]["b"]["name"], "two.md");
        assert!(json["catalog"].is_null());
    }
}
