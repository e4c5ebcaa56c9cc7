//! Command implementations.

use anyhow::{Context, Result};
use fnol_core::schema::CLAIM_RESULT_SCHEMA_JSON;
use fnol_core::{ClaimProcessor, ClaimResult, RoutingPolicy};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::cli::{CheckPolicyArgs, ProcessArgs};

/// One processed document in a batch.
#[derive(Debug, Serialize)]
pub struct FileResult {
    pub filename: String,
    pub result: ClaimResult,
}

/// Results of a batch plus the number of documents that could not be read.
#[derive(Debug)]
pub struct BatchOutcome {
    pub results: Vec<FileResult>,
    pub failed: usize,
}

/// Run the `process` command, writing JSON to `out`. Returns `false` when
/// any input failed.
///
/// When the only requested document cannot be read, nothing is written.
pub fn execute_process(args: &ProcessArgs, out: &mut impl Write) -> Result<bool> {
    let policy = match &args.policy {
        Some(path) => RoutingPolicy::from_file(path)
            .with_context(|| format!("Failed to load policy {}", path.display()))?,
        None => RoutingPolicy::default(),
    };
    tracing::debug!(version = %policy.policy_version, "Routing policy loaded");

    let processor = ClaimProcessor::new(policy);
    let outcome = process_files(&processor, &args.files);
    let Some(json) = render(&outcome.results, args.files.len() == 1, args.compact)? else {
        return Ok(false);
    };

    writeln!(out, "{}", json)?;
    if let Some(path) = &args.output {
        fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Results written");
    }

    Ok(outcome.failed == 0)
}

/// Process each readable file; unreadable files are reported and skipped.
pub fn process_files<P: AsRef<Path>>(processor: &ClaimProcessor, files: &[P]) -> BatchOutcome {
    let mut results = Vec::with_capacity(files.len());
    let mut failed = 0;

    for path in files {
        let path = path.as_ref();
        match read_document(path) {
            Ok(text) => {
                let result = processor.process(&text);
                tracing::debug!(
                    file = %path.display(),
                    route = %result.recommended_route,
                    "Processed document"
                );
                results.push(FileResult {
                    filename: display_name(path),
                    result,
                });
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed += 1;
            }
        }
    }

    BatchOutcome { results, failed }
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Serialize a batch. A single requested document is emitted as the bare
/// result object; anything else as an array of `{filename, result}`.
///
/// Returns `None` for a single requested document that produced no result.
pub fn render(results: &[FileResult], single: bool, compact: bool) -> Result<Option<String>> {
    let value = match (results, single) {
        ([only], true) => serde_json::to_value(&only.result)?,
        (_, true) => return Ok(None),
        (_, false) => serde_json::to_value(results)?,
    };

    let json = if compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(Some(json))
}

/// Run the `check-policy` command.
pub fn execute_check_policy(args: CheckPolicyArgs) -> Result<()> {
    let policy = RoutingPolicy::from_file(&args.path)
        .with_context(|| format!("Invalid policy {}", args.path.display()))?;
    print!("{}", policy_yaml(&policy)?);
    Ok(())
}

/// The effective policy, with every default filled in.
pub fn policy_yaml(policy: &RoutingPolicy) -> Result<String> {
    serde_yaml::to_string(policy).context("Failed to serialize policy")
}

/// Run the `schema` command.
pub fn execute_schema() -> Result<()> {
    print!("{}", CLAIM_RESULT_SCHEMA_JSON);
    Ok(())
}
