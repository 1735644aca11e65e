//! `spur paths` - compute shortest paths from a given start node

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use spur_core::error::Result;
use spur_core::graph::{load_graph, shortest_paths, ShortestPaths};
use spur_core::trace_time;

pub fn run(cli: &Cli, start_node: char, started: Instant) -> Result<()> {
    let graph = load_graph(&cli.graph)?;
    let result = shortest_paths(&graph, &start_node)?;

    output(cli, &result)?;

    trace_time!(started, "paths", reached = result.paths.len());
    Ok(())
}

pub(crate) fn output(cli: &Cli, result: &ShortestPaths<char>) -> Result<()> {
    match cli.format {
        OutputFormat::Human => println!("{}", result.render()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}
