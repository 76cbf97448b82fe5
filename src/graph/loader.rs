//! Graph documents
//!
//! A graph can be described as JSON:
//!
//! ```json
//! {
//!   "vertices": [{ "name": "A", "x": 0, "y": 0, "h": 3 }, { "name": "B", "h": 0 }],
//!   "edges": [{ "from": "A", "to": "B", "cost": 3 }]
//! }
//! ```
//!
//! Edges are bidirectional unless `"bidirectional": false` is given.

use super::store::{GraphError, GraphStore};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexDocument {
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, alias = "heuristic")]
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    pub cost: f64,
    #[serde(default = "default_bidirectional")]
    pub bidirectional: bool,
}

fn default_bidirectional() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub vertices: Vec<VertexDocument>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

impl GraphDocument {
    /// Describe an existing store
    ///
    /// Every directed edge is emitted on its own.
    pub fn from_store(store: &GraphStore) -> Self {
        let vertex_name = |id| store.vertex(id).map(|v| v.name.clone()).unwrap_or_default();
        GraphDocument {
            vertices: store
                .vertices()
                .map(|v| VertexDocument {
                    name: v.name.clone(),
                    x: v.x,
                    y: v.y,
                    h: v.heuristic,
                })
                .collect(),
            edges: store
                .edges()
                .map(|e| EdgeDocument {
                    from: vertex_name(e.source),
                    to: vertex_name(e.target),
                    cost: e.cost,
                    bidirectional: false,
                })
                .collect(),
        }
    }

    /// Build a store, validating every vertex and edge
    pub fn into_store(self) -> Result<GraphStore, GraphError> {
        let mut store = GraphStore::new();
        for vertex in self.vertices {
            let id = store.add_vertex(vertex.name, vertex.h)?;
            store.place_vertex(id, vertex.x, vertex.y)?;
        }
        for edge in self.edges {
            let from = store.resolve(&edge.from)?;
            let to = store.resolve(&edge.to)?;
            if edge.bidirectional {
                store.add_undirected_edge(from, to, edge.cost)?;
            } else {
                store.add_edge(from, to, edge.cost)?;
            }
        }
        Ok(store)
    }
}

impl GraphStore {
    /// Parse a JSON graph document
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Ok(document.into_store()?)
    }
}

/// Load a JSON graph document from disk
pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphStore, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let store = GraphStore::from_json_str(&json)?;
    info!(
        "Loaded graph from {:?}: {} vertices, {} edges",
        path,
        store.vertex_count(),
        store.edge_count()
    );
    Ok(store)
}
