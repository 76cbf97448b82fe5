//! Waypoint
//!
//! Explores a weighted directed graph from a start vertex toward a goal with
//! five interchangeable strategies and reports, for each run, the path found,
//! its cost, the order vertices were visited in, and the time taken.
//!
//! - Uninformed: breadth-first, depth-first, uniform-cost
//! - Informed: A*, greedy best-first (using per-vertex heuristics)
//!
//! ## Example Usage
//!
//! ```rust
//! use waypoint::{GraphStore, SearchEngine, Strategy};
//!
//! let mut store = GraphStore::new();
//! let depot = store.add_vertex("Depot", 4.0).unwrap();
//! let market = store.add_vertex("Market", 2.0).unwrap();
//! let harbor = store.add_vertex("Harbor", 0.0).unwrap();
//!
//! store.add_undirected_edge(depot, market, 2.0).unwrap();
//! store.add_undirected_edge(market, harbor, 3.0).unwrap();
//! store.add_edge(depot, harbor, 9.0).unwrap();
//!
//! let engine = SearchEngine::new(&store);
//! let outcome = engine.run(Strategy::UniformCost, "Depot", "Harbor").unwrap();
//! assert_eq!(outcome.path, vec!["Depot", "Market", "Harbor"]);
//! assert_eq!(outcome.path_cost, 5.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    load_graph, Edge, GraphDocument, GraphError, GraphResult, GraphStore, LoadError, Vertex,
    VertexId,
};

pub use algo::{build_view, AlgoError, AlgoResult, SearchEngine, SearchOutcome};

pub use config::SearchConfig;

pub use waypoint_search::{GraphView, MinHeap, SearchError, SearchResult, Strategy};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
