//! Graph store
//!
//! This module holds the weighted directed graph the search strategies run on:
//! - Vertices with unique names, placement and heuristic values
//! - Directed edges with costs of at least 1
//! - JSON graph documents for loading graphs from disk

pub mod edge;
pub mod loader;
pub mod store;
pub mod types;
pub mod vertex;

// Re-export main types
pub use edge::Edge;
pub use loader::{load_graph, EdgeDocument, GraphDocument, LoadError, VertexDocument};
pub use store::{GraphError, GraphResult, GraphStore};
pub use types::VertexId;
pub use vertex::Vertex;
