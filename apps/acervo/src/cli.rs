//! # CLI Module
//!
//! Command-line interface for Acervo.
//!
//! Commands:
//! - `classify <FILE>`: classify one sector from a survey file
//! - `batch <FILE>`: classify several sectors and summarize
//! - `rules`: list the rule cascade in priority order
//! - `serve`: start the HTTP server
//!
//! Survey files are JSON. A single survey is either a bare array of
//! responses or `{"responses": [...]}`; a batch is either a bare array of
//! `{"sector", "responses"}` objects or `{"sectors": [...]}`.

use crate::api;
use crate::config::ServerConfig;
use crate::error::CliError;
use acervo_core::{
    BatchReport, CriticalityLevel, CriticalityVerdict, RuleDescriptor, SectorResponse,
    SectorSurvey, classify, classify_batch, explain, rules,
};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// =============================================================================
// ARGUMENTS
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "acervo", version, about = "Archival sector criticality classifier")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify one sector from a survey file.
    Classify {
        file: PathBuf,
        #[arg(long, help = "Show every rule of the cascade, not only the winner")]
        explain: bool,
    },
    /// Classify several sectors from a batch file.
    Batch {
        file: PathBuf,
        #[arg(long, help = "Only list sectors at this level")]
        level: Option<CriticalityLevel>,
    },
    /// List the classification rules in priority order.
    Rules,
    /// Start the HTTP server.
    Serve(ServerConfig),
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Classify { file, explain } => cmd_classify(&file, cli.json, explain),
        Commands::Batch { file, level } => cmd_batch(&file, cli.json, level),
        Commands::Rules => cmd_rules(cli.json),
        Commands::Serve(config) => api::run_server(config).await,
    }
}

// =============================================================================
// FILE LOADING
// =============================================================================

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode either a bare array or an object wrapping it under `key`.
///
/// The array is decoded on its own so field errors (an unknown slot, a
/// missing answer) are reported as they are.
fn load_list<T: DeserializeOwned>(path: &Path, key: &str) -> Result<Vec<T>, CliError> {
    let parse_error = |source: serde_json::Error| CliError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let content = read_file(path)?;
    let list = match serde_json::from_str::<Value>(&content).map_err(parse_error)? {
        Value::Object(mut map) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(list).map_err(parse_error)
}

/// Load the responses of one sector.
///
/// Accepts `[...]` or `{"responses": [...]}`.
pub fn load_responses(path: &Path) -> Result<Vec<SectorResponse>, CliError> {
    load_list(path, "responses")
}

/// Load a batch of sector surveys.
///
/// Accepts `[...]` or `{"sectors": [...]}`.
pub fn load_surveys(path: &Path) -> Result<Vec<SectorSurvey>, CliError> {
    load_list(path, "sectors")
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Render the verdict for a survey file.
pub fn classify_report(path: &Path, json: bool, with_trace: bool) -> Result<String, CliError> {
    let responses = load_responses(path)?;
    let verdict = classify(&responses);
    info!(
        file = %path.display(),
        responses = responses.len(),
        level = %verdict.level,
        "sector classified"
    );

    if json {
        let value = if with_trace {
            serde_json::json!({ "verdict": verdict, "trace": explain(&responses) })
        } else {
            serde_json::to_value(&verdict)?
        };
        return Ok(serde_json::to_string_pretty(&value)?);
    }

    let mut output = verdict.to_text();
    if with_trace {
        output.push_str("\nRule trace:\n");
        for outcome in explain(&responses) {
            let mark = match (outcome.selected, outcome.fired) {
                (true, _) => "=>",
                (false, true) => " +",
                (false, false) => "  ",
            };
            output.push_str(&format!("{} {}\n", mark, outcome.rule));
        }
    }
    Ok(output)
}

/// Classify one sector and print the verdict.
pub fn cmd_classify(path: &Path, json: bool, with_trace: bool) -> Result<(), CliError> {
    println!("{}", classify_report(path, json, with_trace)?);
    Ok(())
}

/// Render the report for a batch file, optionally filtered by level.
///
/// The summary always covers the whole batch.
pub fn batch_report(
    path: &Path,
    json: bool,
    level: Option<CriticalityLevel>,
) -> Result<String, CliError> {
    let surveys = load_surveys(path)?;
    let mut report: BatchReport = classify_batch(&surveys);
    info!(
        file = %path.display(),
        sectors = report.summary.total,
        high = report.summary.count(CriticalityLevel::High),
        "batch classified"
    );

    if let Some(level) = level {
        report.assessments.retain(|a| a.verdict.level == level);
        debug!(%level, kept = report.assessments.len(), "assessments filtered");
    }

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut output = String::new();
    for assessment in &report.assessments {
        output.push_str(&format_line(&assessment.sector, &assessment.verdict));
    }
    output.push_str(&format!("\nTotal: {}\n", report.summary.total));
    for (level, count) in &report.summary.by_level {
        output.push_str(&format!("  {:<13} {}\n", level.id(), count));
    }
    if !report.summary.high_sectors.is_empty() {
        output.push_str(&format!(
            "High criticality: {}\n",
            report.summary.high_sectors.join(", ")
        ));
    }
    Ok(output)
}

fn format_line(sector: &str, verdict: &CriticalityVerdict) -> String {
    format!(
        "{:<24} {:<13} {:>3}  {}\n",
        sector,
        verdict.level.id(),
        verdict.score,
        verdict.reasons.join("; ")
    )
}

/// Classify a batch and print the report.
pub fn cmd_batch(path: &Path, json: bool, level: Option<CriticalityLevel>) -> Result<(), CliError> {
    print!("{}", batch_report(path, json, level)?);
    Ok(())
}

/// Descriptors of the cascade in priority order.
pub fn rule_descriptors() -> Vec<RuleDescriptor> {
    rules()
        .iter()
        .enumerate()
        .map(|(i, rule)| rule.descriptor(i.saturating_add(1)))
        .collect()
}

/// Render the rule list.
pub fn rules_report(json: bool) -> Result<String, CliError> {
    let descriptors = rule_descriptors();
    if json {
        return Ok(serde_json::to_string_pretty(&descriptors)?);
    }

    let mut output = String::new();
    for d in &descriptors {
        output.push_str(&format!(
            "{}. {:<26} {:<9} {:>3}  {}\n",
            d.priority,
            d.id.id(),
            d.level.id(),
            d.score,
            d.description
        ));
    }
    output.push_str(&format!(
        "   {:<26} {:<9} {:>3}  no rule matched\n",
        "fallback",
        CriticalityLevel::NeedsReview.id(),
        CriticalityLevel::NeedsReview.score()
    ));
    Ok(output)
}

/// Print the rule list.
pub fn cmd_rules(json: bool) -> Result<(), CliError> {
    print!("{}", rules_report(json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classify_command() {
        let cli = Cli::try_parse_from(["acervo", "classify", "survey.json", "--explain"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Classify { explain: true, .. })
        ));
    }

    #[test]
    fn parses_batch_level_filter() {
        let cli = Cli::try_parse_from([
            "acervo",
            "--json",
            "batch",
            "b.json",
            "--level",
            "needs-review",
        ]);
        assert!(matches!(
            cli,
            Ok(Cli {
                json: true,
                command: Commands::Batch {
                    level: Some(CriticalityLevel::NeedsReview),
                    ..
                },
            })
        ));
    }

    #[test]
    fn rejects_unknown_level() {
        let cli = Cli::try_parse_from(["acervo", "batch", "b.json", "--level", "critical"]);
        assert!(cli.is_err());
    }

    #[test]
    fn rules_report_lists_cascade_and_fallback() {
        let text = rules_report(false).unwrap_or_default();
        assert!(text.starts_with("1. high-problems-with-volume"));
        assert!(text.contains("6. low-stable"));
        assert!(text.contains("fallback"));
    }
}
