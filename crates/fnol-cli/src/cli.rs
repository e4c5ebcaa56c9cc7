//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fnol - Extract, validate and route First Notice of Loss documents.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process FNOL text documents and print routing results as JSON
    Process(ProcessArgs),

    /// Load and validate a routing policy, then print it as YAML
    CheckPolicy(CheckPolicyArgs),

    /// Print the JSON Schema of a claim result
    Schema,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Document text files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Routing policy file (.yaml, .yml or .json)
    #[arg(short, long)]
    pub policy: Option<PathBuf>,

    /// Also write the JSON output to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check-policy command.
#[derive(Debug, Parser)]
pub struct CheckPolicyArgs {
    /// Routing policy file (.yaml, .yml or .json)
    pub path: PathBuf,
}
