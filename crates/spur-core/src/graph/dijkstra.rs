//! Single-source shortest paths over a dense adjacency matrix.
//!
//! Classic Dijkstra with a binary min-heap keyed by tentative distance.
//! Correct for non-negative weights only; negative weights are accepted
//! as raw data but carry the standard Dijkstra caveat.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Display;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{Result, SpurError};
use crate::graph::matrix::{GraphMatrix, Weight};

/// Sentinel for "no path found yet". Larger than any reachable sum;
/// relaxation never produces it because overflowing sums are skipped.
pub const INFINITY: Weight = Weight::MAX;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    distance: Weight,
    node: usize,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// One reached node: its best distance and the node immediately
/// preceding it on that path. The start node's predecessor is itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry<L> {
    pub node: L,
    pub distance: Weight,
    pub predecessor: L,
}

/// Result of a single-source computation, ordered by node index.
/// Unreachable nodes are absent (the seeded start always appears).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths<L> {
    pub start: L,
    pub paths: Vec<PathEntry<L>>,
}

/// Compute shortest paths from `start` to every reachable node.
pub fn shortest_paths<L>(graph: &GraphMatrix<L>, start: &L) -> Result<ShortestPaths<L>>
where
    L: Eq + Hash + Clone + Display,
{
    let start_idx = graph
        .index_of(start)
        .ok_or_else(|| SpurError::InvalidStartNode {
            label: start.to_string(),
        })?;

    let n = graph.node_count();
    let mut distances: Vec<Weight> = vec![INFINITY; n];
    let mut records: Vec<Option<(Weight, usize)>> = vec![None; n];
    distances[start_idx] = 0;

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        distance: 0,
        node: start_idx,
    }));

    let mut relaxations = 0u64;
    while let Some(Reverse(HeapEntry { distance, node })) = heap.pop() {
        // Stale entry: a shorter path to this node was already settled.
        if distance > distances[node] {
            continue;
        }

        for neighbor in 0..n {
            let weight = graph.link(node, neighbor)?;

            // An overflowing sum means no usable path through this edge.
            let Some(candidate) = distance.checked_add(weight) else {
                continue;
            };

            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                records[neighbor] = Some((candidate, node));
                relaxations += 1;
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    node: neighbor,
                }));
            }
        }
    }

    // An isolated start never improves its own distance; seed it so the
    // result always names the start.
    if records[start_idx].is_none() {
        records[start_idx] = Some((0, start_idx));
    }

    tracing::debug!(start = %start, nodes = n, relaxations, "dijkstra_done");

    let mut paths = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some((distance, pred_idx)) = record {
            paths.push(PathEntry {
                node: graph.node_at(idx)?.clone(),
                distance: *distance,
                predecessor: graph.node_at(*pred_idx)?.clone(),
            });
        }
    }

    Ok(ShortestPaths {
        start: start.clone(),
        paths,
    })
}

impl<L> ShortestPaths<L>
where
    L: Eq + Display,
{
    /// Render the result line: `label: distance(predecessor), ` per
    /// entry in node-index order, trailing comma retained. The start
    /// node prints without a predecessor suffix.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.paths {
            out.push_str(&format!("{}: {}", entry.node, entry.distance));
            if entry.node != self.start {
                out.push_str(&format!("({})", entry.predecessor));
            }
            out.push_str(", ");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNREACHABLE: Weight = 9_999_999;

    fn graph(labels: &[char], weights: &[&[Weight]]) -> GraphMatrix<char> {
        let mut g = GraphMatrix::new();
        for &l in labels {
            g.add_node(l).unwrap();
        }
        for (i, row) in weights.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                g.set_link(i, j, w).unwrap();
            }
        }
        g
    }

    fn chain() -> GraphMatrix<char> {
        graph(
            &['A', 'B', 'C'],
            &[
                &[0, 1, 10],
                &[UNREACHABLE, 0, 2],
                &[UNREACHABLE, UNREACHABLE, 0],
            ],
        )
    }

    fn entry<'a>(result: &'a ShortestPaths<char>, node: char) -> &'a PathEntry<char> {
        result
            .paths
            .iter()
            .find(|e| e.node == node)
            .unwrap_or_else(|| panic!("no entry for {node}"))
    }

    #[test]
    fn test_chain_prefers_indirect_path() {
        let g = chain();
        let result = shortest_paths(&g, &'A').unwrap();

        assert_eq!(entry(&result, 'B').distance, 1);
        assert_eq!(entry(&result, 'C').distance, 3);
        assert_eq!(entry(&result, 'C').predecessor, 'B');
    }

    #[test]
    fn test_all_zero_weights_yield_zero_distances() {
        let g = graph(&['A', 'B', 'C'], &[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        let result = shortest_paths(&g, &'A').unwrap();

        assert_eq!(result.paths.len(), 3);
        for e in &result.paths {
            assert_eq!(e.distance, 0);
        }
    }

    #[test]
    fn test_isolated_start_is_seeded() {
        let g = graph(
            &['A', 'B'],
            &[&[0, INFINITY], &[INFINITY, 0]],
        );
        let result = shortest_paths(&g, &'A').unwrap();

        assert_eq!(result.paths.len(), 1);
        let a = entry(&result, 'A');
        assert_eq!(a.distance, 0);
        assert_eq!(a.predecessor, 'A');
    }

    #[test]
    fn test_unreachable_node_absent() {
        // C has no finite inbound edge.
        let g = graph(
            &['A', 'B', 'C'],
            &[
                &[0, 1, INFINITY],
                &[1, 0, INFINITY],
                &[INFINITY, INFINITY, 0],
            ],
        );
        let result = shortest_paths(&g, &'A').unwrap();

        assert!(result.paths.iter().all(|e| e.node != 'C'));
    }

    #[test]
    fn test_overflow_candidate_skipped() {
        // 1 + INFINITY would wrap; the checked_add skip makes the edge
        // behave as "no edge" instead.
        let g = graph(
            &['A', 'B', 'C'],
            &[
                &[0, 1, INFINITY],
                &[INFINITY, 0, INFINITY],
                &[INFINITY, INFINITY, 0],
            ],
        );
        let result = shortest_paths(&g, &'A').unwrap();

        assert_eq!(entry(&result, 'B').distance, 1);
        assert!(result.paths.iter().all(|e| e.node != 'C'));
    }

    #[test]
    fn test_idempotent_for_same_start() {
        let g = chain();
        let first = shortest_paths(&g, &'A').unwrap();
        let second = shortest_paths(&g, &'A').unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_distance_equals_predecessor_distance_plus_edge() {
        let g = graph(
            &['A', 'B', 'C', 'D'],
            &[
                &[0, 4, 1, UNREACHABLE],
                &[UNREACHABLE, 0, UNREACHABLE, 2],
                &[UNREACHABLE, 1, 0, 9],
                &[UNREACHABLE, UNREACHABLE, UNREACHABLE, 0],
            ],
        );
        let result = shortest_paths(&g, &'A').unwrap();

        for e in &result.paths {
            if e.node == result.start {
                continue;
            }
            let pred = entry(&result, e.predecessor);
            let edge = g.weight_between(&e.predecessor, &e.node).unwrap();
            assert_eq!(e.distance, pred.distance + edge);
        }
    }

    #[test]
    fn test_invalid_start_node_reported() {
        let g = chain();
        let err = shortest_paths(&g, &'Z').unwrap_err();
        assert!(matches!(err, SpurError::InvalidStartNode { .. }));
    }

    #[test]
    fn test_result_ordered_by_node_index() {
        let g = chain();
        let result = shortest_paths(&g, &'A').unwrap();
        let order: Vec<char> = result.paths.iter().map(|e| e.node).collect();
        assert_eq!(order, vec!['A', 'B', 'C']);
    }

    #[test]
    fn test_render_line_format() {
        let g = chain();
        let result = shortest_paths(&g, &'A').unwrap();
        assert_eq!(result.render(), "A: 0, B: 1(A), C: 3(B), ");
    }
}
