//! Dense graph storage and shortest-path computation.

pub mod dijkstra;
pub mod load;
pub mod matrix;

pub use dijkstra::{shortest_paths, PathEntry, ShortestPaths};
pub use load::load_graph;
pub use matrix::{GraphMatrix, Weight};
