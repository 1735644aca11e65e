//! CLI argument parsing for spur
//!
//! Uses clap derive with global flags: --graph, --format, --quiet,
//! --verbose, --log-level, --log-json.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use crate::format::OutputFormat;

/// Spur - shortest path CLI for dense adjacency-matrix graphs
///
/// With no subcommand, prints the adjacency matrix, prompts for a start
/// node on stdin, and prints shortest paths from it.
#[derive(Parser, Debug)]
#[command(name = "spur")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the graph file
    #[arg(long, global = true, default_value = "graph.txt")]
    pub graph: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output (headers, prompts)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and debug detail on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency matrix
    Matrix,

    /// Compute shortest paths from a start node
    Paths {
        /// Start node label (must appear in the graph file's label line)
        start: char,
    },
}

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}
