//! Human-readable stdout output.

use prompt_flow::discovery::DocumentCatalog;
use prompt_flow::{
    DocumentSummary, FlowReport, LintReport, LintRule, PlannedStep, ProcessedDocument, StepStatus,
};

pub fn print_summary(summary: &DocumentSummary) {
    println!("  {} [{}]", summary.name, summary.kind);
    println!("    path: {}", summary.path.display());
    if let Some(apply_to) = &summary.apply_to {
        println!("    applyTo: {}", apply_to);
    }
    if let Some(mode) = &summary.mode {
        println!("    mode: {}", mode);
    }
    if let Some(model) = &summary.model {
        println!("    model: {}", model);
    }
    if let Some(description) = &summary.description {
        println!("    description: {}", description);
    }
    println!("    length: {} chars", summary.content_length);
    if let Some(preview) = &summary.preview {
        println!("    preview: {}", preview);
    }
}

pub fn print_catalog(catalog: &DocumentCatalog) {
    for (label, docs) in catalog.categories() {
        println!("{} ({}):", label, docs.len());
        for doc in docs {
            print_summary(&doc.summary());
        }
        println!();
    }
    println!("Total: {} files", catalog.total());
}

pub fn print_documents(docs: &[ProcessedDocument]) {
    for (i, doc) in docs.iter().enumerate() {
        println!("{}.", i + 1);
        print_summary(&doc.summary());
    }
}

pub fn print_plan(flow_name: &str, plan: &[PlannedStep]) {
    println!("Dry run: {} ({} steps)", flow_name, plan.len());
    for step in plan {
        println!("  {}. {} -> {}", step.index, step.name, step.file);
    }
}

pub fn print_report(report: &FlowReport) {
    println!("Flow: {}", report.flow_name);
    println!(
        "Execution: {} ({})",
        report.execution.model, report.execution.mode
    );

    if let Some(catalog) = &report.catalog {
        for (label, docs) in catalog.categories() {
            println!("  {} ({}):", label, docs.len());
            for doc in docs {
                println!("    {}", doc.file_name());
            }
        }
    } else {
        for outcome in &report.steps {
            let detail = match &outcome.status {
                StepStatus::Success { content_length } => format!("ok ({} chars)", content_length),
                StepStatus::Skipped { reason } => format!("skipped: {}", reason),
                StepStatus::Error { error } => format!("error: {}", error),
            };
            println!("  [{}] {} {} - {}", outcome.step_type, outcome.step, outcome.file, detail);
        }
        println!(
            "Summary: {} succeeded, {} skipped, {} failed",
            report.succeeded(),
            report.skipped(),
            report.failed()
        );
    }
}

pub fn print_context(context: &str) {
    if context.is_empty() {
        return;
    }
    println!();
    println!("Combined context:");
    println!("{}", context);
}

pub fn print_lint(report: &LintReport) {
    for diagnostic in &report.diagnostics {
        println!("{}", diagnostic);
    }
    for rule in LintRule::ALL {
        let count = report.by_rule(rule).count();
        if count > 0 {
            println!("  {}: {}", rule, count);
        }
    }
    println!(
        "{} files checked: {} errors, {} warnings",
        report.files_checked,
        report.errors(),
        report.warnings()
    );
}
