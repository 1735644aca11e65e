//! `spur matrix` - print the adjacency matrix

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use spur_core::error::Result;
use spur_core::graph::{load_graph, GraphMatrix, Weight};
use spur_core::trace_time;

pub fn run(cli: &Cli, started: Instant) -> Result<()> {
    let graph = load_graph(&cli.graph)?;

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Adjacency Matrix:");
            }
            print!("{}", graph.render());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(&graph)?)?);
        }
    }

    trace_time!(started, "matrix", nodes = graph.node_count());
    Ok(())
}

pub(crate) fn to_json(graph: &GraphMatrix<char>) -> Result<serde_json::Value> {
    let mut weights: Vec<&[Weight]> = Vec::with_capacity(graph.node_count());
    for i in 0..graph.node_count() {
        weights.push(graph.row(i)?);
    }

    Ok(serde_json::json!({
        "labels": graph.labels(),
        "weights": weights,
    }))
}
