//! Command-line arguments and the check command

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use recite_diff::{
    sentence_breakdown, DiffConfig, DiffEngine, DiffEntry, DiffOptions, PracticeRecord,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::render::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Marked-up reference text and accuracy
    Text,
    /// Diff entries, accuracy and sentence scores as JSON
    Json,
    /// Practice record payload as JSON
    Record,
}

/// Check a recited transcript against its reference text
#[derive(Debug, Parser)]
#[command(name = "recite-check", version, about)]
pub struct Cli {
    /// Reference text file
    pub reference: PathBuf,

    /// Transcript file ("-" reads stdin)
    #[arg(conflicts_with = "transcript")]
    pub transcript_file: Option<PathBuf>,

    /// Transcript given inline
    #[arg(short, long)]
    pub transcript: Option<String>,

    /// Do not penalize content after the last recognized character
    #[arg(long)]
    pub tail_tolerant: bool,

    /// Only identical characters match (no homophones)
    #[arg(long)]
    pub exact: bool,

    /// Config file (default: platform config dir/recite/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Include per-sentence scores in text output
    #[arg(long)]
    pub sentences: bool,

    /// Text identifier stored in record output
    #[arg(long, default_value = "")]
    pub text_id: String,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config file and apply flag overrides
    pub fn resolve_config(&self) -> Result<DiffConfig> {
        let mut config = match &self.config {
            Some(path) => DiffConfig::load_from(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DiffConfig::load().context("Failed to load config")?,
        };

        if self.tail_tolerant {
            config.tail_unmatched_as_normal = true;
        }
        if self.exact {
            config.homophones = false;
        }
        Ok(config)
    }

    pub fn read_transcript(&self) -> Result<String> {
        if let Some(text) = &self.transcript {
            return Ok(text.clone());
        }
        match &self.transcript_file {
            Some(path) if path.as_os_str() == "-" => read_stdin(),
            Some(path) => read_file(path),
            None => bail!("No transcript given (pass a file, '-' or --transcript)"),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read transcript from stdin")?;
    Ok(buf)
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    accuracy: u8,
    diff: &'a [DiffEntry],
    sentences: Vec<recite_diff::SentenceScore>,
}

/// Outcome of one check, before formatting
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub reference: String,
    pub transcript: String,
    pub entries: Vec<DiffEntry>,
    pub accuracy: u8,
}

/// Diff `transcript` against `reference` with the resolved config
pub fn check(reference: &str, transcript: &str, config: &DiffConfig) -> CheckOutcome {
    let mut engine = DiffEngine::with_config(config);
    let options: DiffOptions = config.options();
    let entries = engine.diff(reference, transcript, &options);
    let accuracy = recite_diff::accuracy(&entries);

    debug!(
        "Reading cache holds {} chars after check",
        engine.matcher().cache().len()
    );

    CheckOutcome {
        reference: reference.to_string(),
        transcript: transcript.to_string(),
        entries,
        accuracy,
    }
}

/// Format an outcome for stdout
pub fn format_outcome(cli: &Cli, outcome: &CheckOutcome) -> Result<String> {
    match cli.format {
        OutputFormat::Text => Ok(render_text(outcome, cli.sentences)),
        OutputFormat::Json => {
            let report = JsonReport {
                accuracy: outcome.accuracy,
                diff: &outcome.entries,
                sentences: sentence_breakdown(&outcome.reference, &outcome.entries),
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize report")
        }
        OutputFormat::Record => {
            let title = cli
                .reference
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let record = PracticeRecord::from_diff(
                cli.text_id.clone(),
                title,
                outcome.transcript.clone(),
                outcome.entries.clone(),
            );
            record.to_json().context("Failed to serialize record")
        }
    }
}

/// Run the command and return what should be printed
pub fn run(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config()?;
    let reference = read_file(&cli.reference)?;
    let transcript = cli.read_transcript()?;

    info!(
        "Checking {} ({} chars) against a {}-char transcript",
        cli.reference.display(),
        reference.chars().count(),
        transcript.chars().count()
    );

    let outcome = check(reference.trim_end(), transcript.trim(), &config);
    info!("Accuracy: {}%", outcome.accuracy);

    format_outcome(cli, &outcome)
}
