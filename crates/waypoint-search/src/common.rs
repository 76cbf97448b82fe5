//! Shared utilities for search algorithms
//!
//! Provides a read-only, optimized view of the graph topology for search execution.

use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Neighbor order is the order edges were supplied in and is stable, which is
/// what makes BFS and DFS exploration sequences reproducible.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Edge costs: aligned with `out_targets`. `None` means every edge costs 1.0
    pub weights: Option<Vec<f64>>,

    /// Heuristic estimate of the remaining cost, one per node index.
    /// `None` means h = 0 everywhere.
    pub heuristics: Option<Vec<f64>>,
}

impl GraphView {
    /// Dense index of a node, if it is part of the view
    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_to_index.get(&node).copied()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: usize) -> &[usize] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get weights for outgoing edges of a node
    pub fn weights(&self, idx: usize) -> Option<&[f64]> {
        self.weights.as_ref().map(|w| {
            let start = self.out_offsets[idx];
            let end = self.out_offsets[idx + 1];
            &w[start..end]
        })
    }

    /// Outgoing `(neighbor index, edge cost)` pairs in native order
    pub fn neighbors(
        &self,
        idx: usize,
    ) -> impl DoubleEndedIterator<Item = (usize, f64)> + ExactSizeIterator + '_ {
        let weights = self.weights(idx);
        self.successors(idx)
            .iter()
            .enumerate()
            .map(move |(i, &target)| (target, weights.map_or(1.0, |w| w[i])))
    }

    /// Heuristic value of a node (by index)
    pub fn heuristic(&self, idx: usize) -> f64 {
        self.heuristics.as_ref().map_or(0.0, |h| h[idx])
    }

    /// Cost of the first edge `from -> to`, if one exists
    pub fn edge_cost(&self, from: usize, to: usize) -> Option<f64> {
        self.neighbors(from)
            .find(|&(target, _)| target == to)
            .map(|(_, cost)| cost)
    }

    /// Helper to create GraphView from adjacency lists
    ///
    /// `outgoing[i]` holds the target indices of node `i` in neighbor order;
    /// `weights[i]` must be aligned with it when present.
    pub fn from_adjacency_list(
        index_to_node: Vec<NodeId>,
        outgoing: Vec<Vec<usize>>,
        weights: Option<Vec<Vec<f64>>>,
        heuristics: Option<Vec<f64>>,
    ) -> Self {
        let node_count = index_to_node.len();
        let node_to_index = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &node)| (node, idx))
            .collect();

        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut flat_weights = if weights.is_some() { Some(Vec::new()) } else { None };

        out_offsets.push(0);
        for (i, neighbors) in outgoing.into_iter().enumerate() {
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());

            if let Some(ref mut w_flat) = flat_weights {
                if let Some(w_row) = weights.as_ref().map(|w| &w[i]) {
                    w_flat.extend(w_row.iter());
                }
            }
        }
        // Nodes without an adjacency row still need an offset entry
        while out_offsets.len() < node_count + 1 {
            out_offsets.push(out_targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            out_offsets,
            out_targets,
            weights: flat_weights,
            heuristics,
        }
    }
}
