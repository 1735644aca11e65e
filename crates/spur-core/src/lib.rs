//! Spur Core Library
//!
//! Graph storage, file loading, and shortest-path computation for the
//! spur CLI.

pub mod error;
pub mod graph;
pub mod logging;
