//! CLI entry point for prompt-flow.

mod cli;
mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, LintFormat, RunArgs};
use prompt_flow::{Discovery, FlowConfig, FlowExecutor, OutputTarget, Settings, SettingsLoader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    match dispatch(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: Cli) -> Result<ExitCode> {
    let base = cli.base_path;
    let settings = load_settings(&base).await?;

    match cli.command.unwrap_or(Commands::Run(RunArgs::default())) {
        Commands::Run(args) => cmd_run(&base, &settings, args).await,
        Commands::List => cmd_list(&base, &settings).await,
        Commands::Read { files } => cmd_read(&base, &settings, &files).await,
        Commands::Lint { format } => cmd_lint(&base, &settings, format).await,
        Commands::Match { path } => cmd_match(&base, &settings, &path).await,
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn load_settings(base: &Path) -> Result<Settings> {
    let mut loader = SettingsLoader::new();
    loader
        .load(base)
        .await
        .with_context(|| format!("failed to load settings from {}", base.display()))?;
    for path in loader.loaded_from() {
        info!(path = %path.display(), "settings loaded");
    }
    Ok(loader.into_settings())
}

fn discovery(base: &Path, settings: &Settings) -> Discovery {
    Discovery::new(base).with_patterns(settings.discovery_patterns())
}

// ---------------------------------------------------------------------------
// Subcommand: run
// ---------------------------------------------------------------------------

async fn cmd_run(base: &Path, settings: &Settings, args: RunArgs) -> Result<ExitCode> {
    let config = match &args.flow {
        Some(path) => FlowConfig::load(path)
            .await
            .with_context(|| format!("failed to load flow {}", path.display()))?,
        None => FlowConfig::default(),
    };

    let executor = FlowExecutor::new(base, config)
        .with_patterns(settings.discovery_patterns())
        .with_skip_volatile(args.skip_volatile || settings.skip_volatile());

    if args.dry_run {
        render::print_plan(&executor.config().name, &executor.plan());
        return Ok(ExitCode::SUCCESS);
    }

    let report = executor.execute().await.context("flow execution failed")?;
    render::print_report(&report);
    if !args.quiet {
        render::print_context(&report.combined_context);
    }

    let target = OutputTarget::resolve(
        base,
        &executor.config().output,
        args.output.as_deref(),
        Some(settings.output_file()),
    );
    if !args.no_save
        && let Some(target) = target
    {
        // A failed save does not fail the run.
        match target.save(&report).await {
            Ok(Some(path)) => println!("Output saved to {}", path.display()),
            Ok(None) => {}
            Err(e) => warn!("Could not save output to {}: {}", target.path.display(), e),
        }
    }

    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

// ---------------------------------------------------------------------------
// Subcommands: list, read, match
// ---------------------------------------------------------------------------

async fn cmd_list(base: &Path, settings: &Settings) -> Result<ExitCode> {
    let catalog = discovery(base, settings)
        .read_all()
        .await
        .context("failed to discover documents")?;
    render::print_catalog(&catalog);
    Ok(ExitCode::SUCCESS)
}

async fn cmd_read(base: &Path, settings: &Settings, files: &[PathBuf]) -> Result<ExitCode> {
    let docs = discovery(base, settings).read_in_order(files).await;
    render::print_documents(&docs);
    Ok(if docs.len() == files.len() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn cmd_match(base: &Path, settings: &Settings, path: &Path) -> Result<ExitCode> {
    let matches = discovery(base, settings)
        .instructions_for(path)
        .await
        .context("failed to read instructions")?;

    if matches.is_empty() {
        println!("No instructions apply to {}", path.display());
    } else {
        println!("Instructions for {}:", path.display());
        for doc in &matches {
            println!(
                "  {} ({})",
                doc.file_name(),
                doc.metadata.apply_to.as_deref().unwrap_or("")
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ---------------------------------------------------------------------------
// Subcommand: lint
// ---------------------------------------------------------------------------

async fn cmd_lint(base: &Path, settings: &Settings, format: LintFormat) -> Result<ExitCode> {
    let discovery = discovery(base, settings);
    let catalog = discovery
        .read_all()
        .await
        .context("failed to discover documents")?;
    let report = settings.linter().check(&catalog, discovery.base());

    match format {
        LintFormat::Text => render::print_lint(&report),
        LintFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize lint report")?;
            println!("{}", json);
        }
    }

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
