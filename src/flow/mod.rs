//! Ordered reading flows declared in YAML.

mod config;
mod executor;
mod output;
mod report;

pub use config::{
    DEFAULT_FLOW_NAME, DEFAULT_FLOW_VERSION, DEFAULT_MODE, DEFAULT_MODEL, DEFAULT_REPORT_FILE,
    ExecutionSettings, FilePatterns, FlowConfig, FlowStep, OutputFormat, OutputSettings,
};
pub use executor::{FlowExecutor, OPTIONAL_MISSING, REQUIRED_MISSING};
pub use output::OutputTarget;
pub use report::{
    DEFAULT_FLOW_REPORT_NAME, FlowReport, PlannedStep, StepDocument, StepOutcome, StepStatus,
};
