//! CLI argument definitions for prompt-flow.
//!
//! All `clap` structures live here so that `main.rs` stays focused on
//! dispatching subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// prompt-flow -- read, run, and lint AI assistant playbooks.
#[derive(Parser)]
#[command(
    name = "prompt-flow",
    version,
    about = "Read, run, and lint *.instructions.md / *.prompt.md playbooks",
    long_about = "Discovers instruction and prompt documents under a base path, runs \
                  ordered YAML flows over them, and writes a combined prompt context."
)]
pub struct Cli {
    /// Directory the playbook lives in.
    #[arg(long, short = 'b', global = true, default_value = ".")]
    pub base_path: PathBuf,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a flow, or read every document when no flow is given.
    Run(RunArgs),

    /// List discovered instructions, prompts, and documents.
    List,

    /// Read the given files in order and print their summaries.
    Read {
        /// Files relative to the base path.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check instructions and prompts for common mistakes.
    Lint {
        #[arg(long, value_enum, default_value_t = LintFormat::Text)]
        format: LintFormat,
    },

    /// Show which instructions apply to a file.
    Match {
        /// Target file, relative to the base path.
        path: PathBuf,
    },
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// YAML flow config.
    #[arg(long, short)]
    pub flow: Option<PathBuf>,

    /// Print the steps that would run without reading anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Write output here instead of the configured path.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Do not print the combined context.
    #[arg(long, short)]
    pub quiet: bool,

    /// Do not write any output file.
    #[arg(long)]
    pub no_save: bool,

    /// Leave prompts marked `volatile: true` out of the combined context.
    #[arg(long)]
    pub skip_volatile: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LintFormat {
    Text,
    Json,
}
