use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueHint};
use strum::IntoEnumIterator;

use crate::scoring::SplitCriterionKind;
use crate::tasks::DEFAULT_MIN_MERIT;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Grow an incremental decision tree over an ARFF stream"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Stream a dataset into a tree and report its best expansion candidate
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// ARFF file to read instances from
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Index of the class attribute (defaults to the last one)
    #[arg(long, value_name = "N")]
    pub class_index: Option<usize>,

    /// Split criterion used to score candidates (gini, info-gain)
    #[arg(long, default_value = "gini", value_name = "CRITERION", value_parser = parse_criterion)]
    pub criterion: SplitCriterionKind,

    /// Stop after this many instances (omit for unlimited)
    #[arg(long, value_name = "N")]
    pub max_instances: Option<u64>,

    /// Stop after this many seconds (omit for unlimited)
    #[arg(long, value_name = "SECONDS")]
    pub max_seconds: Option<u64>,

    /// Sample the tree every N instances
    #[arg(
        long,
        default_value_t = 1_000,
        value_name = "N",
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    pub sample_frequency: u64,

    /// Smallest merit a candidate needs before its leaf is split
    #[arg(long, default_value_t = DEFAULT_MIN_MERIT, value_name = "MERIT", value_parser = parse_min_merit)]
    pub min_merit: f64,

    /// File to dump growth snapshots to, as JSON
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub dump_file: Option<PathBuf>,
}

fn parse_criterion(raw: &str) -> Result<SplitCriterionKind> {
    for candidate in candidate_spellings(raw) {
        if let Ok(kind) = candidate.parse::<SplitCriterionKind>() {
            return Ok(kind);
        }
    }
    let known: Vec<String> = SplitCriterionKind::iter().map(|k| k.to_string()).collect();
    Err(anyhow!(
        "unknown criterion '{raw}', expected one of: {}",
        known.join(", ")
    ))
}

fn parse_min_merit(raw: &str) -> Result<f64> {
    let merit: f64 = raw
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid merit '{raw}': {e}"))?;
    if !merit.is_finite() || merit <= 0.0 {
        return Err(anyhow!("min merit must be a positive number, got {raw}"));
    }
    Ok(merit)
}

fn candidate_spellings(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return out;
    }

    out.push(trimmed.to_string());
    out.push(kebab_from_token(trimmed));
    out.push(trimmed.replace('_', "-"));
    out.sort();
    out.dedup();
    out
}

fn kebab_from_token(token: &str) -> String {
    let mut buf = String::new();
    let mut prev_lower = false;
    for ch in token.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                buf.push('-');
            }
            buf.extend(ch.to_lowercase());
            prev_lower = false;
        } else if ch == '_' {
            buf.push('-');
            prev_lower = false;
        } else {
            buf.push(ch);
            prev_lower = ch.is_lowercase();
        }
    }
    buf
}
