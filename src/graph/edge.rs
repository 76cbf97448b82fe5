//! Edge implementation
//!
//! Edges are directed. A two-way connection is stored as two edges.

use super::types::VertexId;
use serde::{Deserialize, Serialize};

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex (edge goes FROM this vertex)
    pub source: VertexId,

    /// Target vertex (edge goes TO this vertex)
    pub target: VertexId,

    /// Traversal cost, at least 1
    pub cost: f64,
}

impl Edge {
    /// Create a new directed edge
    pub fn new(source: VertexId, target: VertexId, cost: f64) -> Self {
        Edge { source, target, cost }
    }

    /// The same connection in the opposite direction
    pub fn reversed(&self) -> Self {
        Edge::new(self.target, self.source, self.cost)
    }

    /// Check if this edge connects two specific vertices (in either direction)
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
