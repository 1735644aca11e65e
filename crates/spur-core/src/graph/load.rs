//! Graph file loader.
//!
//! Input format:
//! - Line 1: contiguous single-character node labels (no delimiter),
//!   defining node count and order.
//! - Remainder: N×N whitespace-delimited integers read in row-major
//!   order, where entry (i, j) is the weight of the directed edge from
//!   node i to node j.
//!
//! Tokens past the N² read are ignored, matching the original reader
//! which stops after filling the matrix.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SpurError};
use crate::graph::matrix::GraphMatrix;

/// Load a graph from a text file.
pub fn load_graph(path: &Path) -> Result<GraphMatrix<char>> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound || e.kind() == ErrorKind::PermissionDenied {
            SpurError::GraphNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SpurError::Io(e)
        }
    })?;

    let graph = parse_graph(&content, path)?;
    tracing::debug!(path = %path.display(), nodes = graph.node_count(), "graph_loaded");
    Ok(graph)
}

/// Parse graph file content. Split out from [`load_graph`] so tests can
/// exercise the format without touching the filesystem.
pub fn parse_graph(content: &str, path: &Path) -> Result<GraphMatrix<char>> {
    let malformed = |reason: String| SpurError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };

    let mut lines = content.lines();
    let label_line = lines.next().unwrap_or("").trim_end();
    if label_line.is_empty() {
        return Err(malformed("empty label line".to_string()));
    }

    let mut graph = GraphMatrix::new();
    for label in label_line.chars() {
        if label.is_whitespace() {
            return Err(malformed(format!(
                "label line contains whitespace before position {}",
                graph.node_count() + 1
            )));
        }
        graph.add_node(label)?;
    }

    let n = graph.node_count();
    let rest = lines.collect::<Vec<_>>().join("\n");
    let mut tokens = rest.split_whitespace();

    for i in 0..n {
        for j in 0..n {
            let token = tokens.next().ok_or_else(|| {
                malformed(format!(
                    "expected {} weights, found {}",
                    n * n,
                    i * n + j
                ))
            })?;
            let weight = token.parse::<i64>().map_err(|_| {
                malformed(format!(
                    "weight ({}, {}) is not an integer: '{}'",
                    i, j, token
                ))
            })?;
            graph.set_link(i, j, weight)?;
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CHAIN: &str = "ABC\n0 1 10\n9999 0 2\n9999 9999 0\n";

    fn parse(content: &str) -> Result<GraphMatrix<char>> {
        parse_graph(content, Path::new("graph.txt"))
    }

    #[test]
    fn test_parse_chain_graph() {
        let g = parse(CHAIN).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.labels(), &['A', 'B', 'C']);
        assert_eq!(g.weight_between(&'A', &'B').unwrap(), 1);
        assert_eq!(g.weight_between(&'B', &'C').unwrap(), 2);
        assert_eq!(g.weight_between(&'A', &'C').unwrap(), 10);
        assert_eq!(g.weight_between(&'C', &'A').unwrap(), 9999);
    }

    #[test]
    fn test_parse_negative_weight_accepted_as_raw_data() {
        let g = parse("AB\n0 -3\n5 0\n").unwrap();
        assert_eq!(g.weight_between(&'A', &'B').unwrap(), -3);
    }

    #[test]
    fn test_empty_label_line_rejected() {
        let err = parse("\n0\n").unwrap_err();
        assert!(matches!(err, SpurError::MalformedInput { .. }));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let err = parse("ABA\n0 0 0\n0 0 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, SpurError::DuplicateLabel { .. }));
    }

    #[test]
    fn test_short_matrix_rejected() {
        let err = parse("ABC\n0 1 10\n9999 0\n").unwrap_err();
        match err {
            SpurError::MalformedInput { reason, .. } => {
                assert!(reason.contains("expected 9 weights, found 5"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_token_rejected() {
        let err = parse("AB\n0 x\n1 0\n").unwrap_err();
        match err {
            SpurError::MalformedInput { reason, .. } => {
                assert!(reason.contains("not an integer"));
                assert!(reason.contains("'x'"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_surplus_tokens_ignored() {
        let g = parse("AB\n0 1\n2 0\n7 7 7\n").unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.weight_between(&'B', &'A').unwrap(), 2);
    }

    #[test]
    fn test_weights_spread_across_arbitrary_lines() {
        // The matrix is a whitespace-delimited stream, not strict rows.
        let g = parse("AB\n0 1 2\n0\n").unwrap();
        assert_eq!(g.weight_between(&'B', &'A').unwrap(), 2);
        assert_eq!(g.weight_between(&'B', &'B').unwrap(), 0);
    }

    #[test]
    fn test_load_missing_file_is_graph_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, SpurError::GraphNotFound { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(CHAIN.as_bytes()).unwrap();

        let g = load_graph(&path).unwrap();
        assert_eq!(g.node_count(), 3);
    }
}
