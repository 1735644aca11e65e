//! Default interactive flow: print the adjacency matrix, read a start
//! node from stdin, print shortest paths from it.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{matrix, paths};
use spur_core::error::{Result, SpurError};
use spur_core::graph::{load_graph, shortest_paths};
use spur_core::trace_time;

pub fn run(cli: &Cli, started: Instant) -> Result<()> {
    let graph = load_graph(&cli.graph)?;

    // JSON consumers get a single document, so nothing is printed
    // until the start node has been read and the computation is done.
    if cli.format == OutputFormat::Json {
        let start_node = read_start_node()?;
        let result = shortest_paths(&graph, &start_node)?;

        let combined = serde_json::json!({
            "matrix": matrix::to_json(&graph)?,
            "paths": result,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);

        trace_time!(started, "interactive", reached = result.paths.len());
        return Ok(());
    }

    if !cli.quiet {
        println!("Adjacency Matrix:");
    }
    print!("{}", graph.render());
    println!();

    if !cli.quiet {
        print!("Select a starting node: ");
        io::stdout().flush()?;
    }
    let start_node = read_start_node()?;

    let result = shortest_paths(&graph, &start_node)?;

    if !cli.quiet {
        println!("Shortest Paths:");
    }
    paths::output(cli, &result)?;

    trace_time!(started, "interactive", reached = result.paths.len());
    Ok(())
}

/// Read the start node label: the first non-whitespace character on stdin.
fn read_start_node() -> Result<char> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    line.chars()
        .find(|c| !c.is_whitespace())
        .ok_or_else(|| SpurError::UsageError("no start node provided on stdin".to_string()))
}
