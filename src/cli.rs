//! Command line interface of `bitagent`, built on clap.
//!
//! Takes one optional binary string plus flags choosing the table, the start
//! state and how the run is shown.

use std::path::PathBuf;

use clap::Parser;

/// Runs a model-based agent over a string of 1s and 0s.
#[derive(Debug, Parser)]
#[command(name = "bitagent", version, about)]
pub struct Cli {
    /// Binary string to scan. Prompts for one when omitted.
    pub bits: Option<String>,

    /// TOML or JSON file with the transition table (defaults to `bitagent.toml`).
    #[arg(long, value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Overrides the configured start state.
    #[arg(long, value_name = "STATE")]
    pub start: Option<String>,

    /// Prints the state diagram before running.
    #[arg(long, default_value_t = false)]
    pub graph: bool,

    /// Steps through the run frame by frame.
    #[arg(long, conflicts_with = "json", default_value_t = false)]
    pub step: bool,

    /// Prints every snapshot of the run as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enables debug logging on stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
