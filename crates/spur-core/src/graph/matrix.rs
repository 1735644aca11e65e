//! Dense adjacency-matrix graph store.
//!
//! Stores an ordered node list with a label-to-index lookup and an N×N
//! table of directed edge weights. Appropriate for small, dense graphs
//! where every ordered pair carries a weight.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::error::{Result, SpurError};

/// Edge weight type. Large values act as "effectively unreachable"
/// because relaxation skips candidates that overflow.
pub type Weight = i64;

/// A dense directed graph keyed by generic node labels.
///
/// Node indices are stable and equal insertion order. No symmetry is
/// assumed between (i, j) and (j, i); self-loops are permitted.
#[derive(Debug, Clone, Default)]
pub struct GraphMatrix<L> {
    nodes: Vec<L>,
    index: HashMap<L, usize>,
    weights: Vec<Vec<Weight>>,
}

impl<L> GraphMatrix<L>
where
    L: Eq + Hash + Clone + Display,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            weights: Vec::new(),
        }
    }

    /// Append a node, assigning it the next index. Labels must be unique.
    pub fn add_node(&mut self, label: L) -> Result<usize> {
        if self.index.contains_key(&label) {
            return Err(SpurError::DuplicateLabel {
                label: label.to_string(),
            });
        }

        let idx = self.nodes.len();
        self.index.insert(label.clone(), idx);
        self.nodes.push(label);

        // Grow the matrix: one new column per existing row, one new row.
        for row in &mut self.weights {
            row.push(0);
        }
        self.weights.push(vec![0; idx + 1]);

        Ok(idx)
    }

    /// Set the directed weight from node `from` to node `to` by index.
    pub fn set_link(&mut self, from: usize, to: usize, weight: Weight) -> Result<()> {
        let len = self.nodes.len();
        let bad = if from >= len {
            Some(from)
        } else if to >= len {
            Some(to)
        } else {
            None
        };
        if let Some(index) = bad {
            return Err(SpurError::IndexOutOfRange { index, len });
        }

        self.weights[from][to] = weight;
        Ok(())
    }

    /// Get the directed weight from node `from` to node `to` by index.
    pub fn link(&self, from: usize, to: usize) -> Result<Weight> {
        let len = self.nodes.len();
        let bad = if from >= len {
            Some(from)
        } else if to >= len {
            Some(to)
        } else {
            None
        };
        if let Some(index) = bad {
            return Err(SpurError::IndexOutOfRange { index, len });
        }

        Ok(self.weights[from][to])
    }

    /// Look up a node label by index.
    pub fn node_at(&self, index: usize) -> Result<&L> {
        self.nodes.get(index).ok_or(SpurError::IndexOutOfRange {
            index,
            len: self.nodes.len(),
        })
    }

    /// Look up a node's index by label.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node labels in insertion order.
    pub fn labels(&self) -> &[L] {
        &self.nodes
    }

    /// All outgoing weights of the node at `index`, in column order.
    pub fn row(&self, index: usize) -> Result<&[Weight]> {
        self.weights
            .get(index)
            .map(Vec::as_slice)
            .ok_or(SpurError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            })
    }

    /// Get the directed weight between two labeled nodes.
    pub fn weight_between(&self, from: &L, to: &L) -> Result<Weight> {
        let from_idx = self.index_of(from).ok_or_else(|| SpurError::UnknownNode {
            label: from.to_string(),
        })?;
        let to_idx = self.index_of(to).ok_or_else(|| SpurError::UnknownNode {
            label: to.to_string(),
        })?;

        self.link(from_idx, to_idx)
    }

    /// Render the full matrix as text: a header row of labels, then one
    /// row per node prefixed by its label, columns space-aligned.
    pub fn render(&self) -> String {
        let mut width = 1;
        for row in &self.weights {
            for w in row {
                width = width.max(w.to_string().len());
            }
        }
        for label in &self.nodes {
            width = width.max(label.to_string().len());
        }

        let mut out = String::new();
        out.push_str(&" ".repeat(width + 1));
        for label in &self.nodes {
            out.push_str(&format!("{:>width$} ", label, width = width));
        }
        out.push('\n');

        for (i, label) in self.nodes.iter().enumerate() {
            out.push_str(&format!("{:>width$} ", label, width = width));
            for w in &self.weights[i] {
                out.push_str(&format!("{:>width$} ", w, width = width));
            }
            out.push('\n');
        }

        out
    }
}
