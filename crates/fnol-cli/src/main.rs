//! fnol - route First Notice of Loss documents from the command line.

use clap::Parser;
use fnol_cli::commands;
use fnol_cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Process(args) => commands::execute_process(&args, &mut std::io::stdout().lock()),
        Command::CheckPolicy(args) => commands::execute_check_policy(args).map(|_| true),
        Command::Schema => commands::execute_schema().map(|_| true),
    }
}

/// Log to stderr so stdout stays valid JSON.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fnol_core={0},fnol_cli={0}", default_level)));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
