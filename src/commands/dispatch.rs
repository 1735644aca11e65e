//! Command dispatch logic for spur

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{interactive, matrix, paths};
use spur_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        // No subcommand: the classic interactive flow - print the
        // matrix, read a start node from stdin, print shortest paths.
        None => interactive::run(cli, start),

        Some(Commands::Matrix) => matrix::run(cli, start),

        Some(Commands::Paths { start: start_node }) => paths::run(cli, *start_node, start),
    }
}
