//! Vertex implementation
//!
//! A vertex carries a unique name, a 2-D placement used only for display, and
//! a heuristic estimate of the remaining cost to the goal used by the
//! informed strategies.

use super::types::VertexId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier for this vertex
    pub id: VertexId,

    /// Unique, human readable name
    pub name: String,

    /// Horizontal placement
    pub x: f64,

    /// Vertical placement
    pub y: f64,

    /// Estimated cost to the goal (non-negative)
    pub heuristic: f64,
}

impl Vertex {
    /// Create a vertex at the origin
    pub fn new(id: VertexId, name: impl Into<String>, heuristic: f64) -> Self {
        Vertex {
            id,
            name: name.into(),
            x: 0.0,
            y: 0.0,
            heuristic,
        }
    }

    /// Placement as an `(x, y)` pair
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_creation() {
        let vertex = Vertex::new(VertexId::new(3), "Depot", 4.5);
        assert_eq!(vertex.name, "Depot");
        assert_eq!(vertex.heuristic, 4.5);
        assert_eq!(vertex.position(), (0.0, 0.0));
    }
}
