//! In-memory graph storage implementation
//!
//! Vertices keep their insertion order and each vertex keeps its outgoing
//! edges in insertion order. Both orders feed straight into neighbor order,
//! which the uninformed strategies depend on for reproducible exploration.

use super::edge::Edge;
use super::types::VertexId;
use super::vertex::Vertex;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

/// Smallest cost an edge may carry
pub const MIN_EDGE_COST: f64 = 1.0;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Vertex '{0}' not found")]
    VertexNameNotFound(String),

    #[error("Vertex '{0}' already exists")]
    DuplicateVertex(String),

    #[error("Vertex name must not be empty")]
    EmptyName,

    #[error("Edge {0} -> {1} not found")]
    EdgeNotFound(VertexId, VertexId),

    #[error("Edge {0} -> {1} already exists")]
    EdgeAlreadyExists(VertexId, VertexId),

    #[error("Invalid edge: {0} cannot connect to itself")]
    SelfLoop(VertexId),

    #[error("Invalid edge cost {0}: costs must be finite and at least 1")]
    InvalidCost(f64),

    #[error("Invalid heuristic {0}: heuristics must be finite and non-negative")]
    InvalidHeuristic(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory graph storage
///
/// - vertices: VertexId -> Vertex, in insertion order
/// - name_index: name -> VertexId
/// - outgoing: VertexId -> outgoing edges, in insertion order
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: IndexMap<VertexId, Vertex>,

    name_index: FxHashMap<String, VertexId>,

    outgoing: FxHashMap<VertexId, Vec<Edge>>,

    edge_count: usize,

    next_vertex_id: u64,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// The eight-vertex demonstration graph
    ///
    /// Every connection runs both ways:
    /// A-B 2, A-C 3, B-D 3, B-E 4, C-D 2, D-E 1, D-G 3, E-Goal 2, C-F 4, F-G 2, G-Goal 3
    pub fn sample() -> Self {
        const VERTICES: [(&str, f64, f64, f64); 8] = [
            ("A", 0.0, 200.0, 7.0),
            ("B", 150.0, 100.0, 6.0),
            ("C", 150.0, 300.0, 5.0),
            ("D", 300.0, 200.0, 4.0),
            ("E", 450.0, 100.0, 2.0),
            ("F", 300.0, 400.0, 3.0),
            ("G", 450.0, 300.0, 1.0),
            ("Goal", 600.0, 200.0, 0.0),
        ];
        // Positions in VERTICES: A B C D E F G Goal
        const EDGES: [(usize, usize, f64); 11] = [
            (0, 1, 2.0),
            (0, 2, 3.0),
            (1, 3, 3.0),
            (1, 4, 4.0),
            (2, 3, 2.0),
            (3, 4, 1.0),
            (3, 6, 3.0),
            (4, 7, 2.0),
            (2, 5, 4.0),
            (5, 6, 2.0),
            (6, 7, 3.0),
        ];

        let mut store = GraphStore::new();
        let mut ids = Vec::with_capacity(VERTICES.len());
        for (name, x, y, h) in VERTICES {
            let id = store.push_vertex(name.to_string(), h);
            if let Some(vertex) = store.vertices.get_mut(&id) {
                vertex.x = x;
                vertex.y = y;
            }
            ids.push(id);
        }
        for (a, b, cost) in EDGES {
            let (a, b) = (ids[a], ids[b]);
            store.push_edge(Edge::new(a, b, cost));
            store.push_edge(Edge::new(b, a, cost));
        }
        store
    }

    /// Add a vertex with a unique name
    pub fn add_vertex(&mut self, name: impl Into<String>, heuristic: f64) -> GraphResult<VertexId> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.name_index.contains_key(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }
        validate_heuristic(heuristic)?;

        let id = self.push_vertex(name, heuristic);
        debug!("Added vertex {}", id);
        Ok(id)
    }

    fn push_vertex(&mut self, name: String, heuristic: f64) -> VertexId {
        let id = VertexId::new(self.next_vertex_id);
        self.next_vertex_id += 1;
        self.name_index.insert(name.clone(), id);
        self.vertices.insert(id, Vertex::new(id, name, heuristic));
        id
    }

    /// Move a vertex to a new placement
    pub fn place_vertex(&mut self, id: VertexId, x: f64, y: f64) -> GraphResult<()> {
        let vertex = self.vertices.get_mut(&id).ok_or(GraphError::VertexNotFound(id))?;
        vertex.x = x;
        vertex.y = y;
        Ok(())
    }

    /// Replace the heuristic estimate of a vertex
    pub fn set_heuristic(&mut self, id: VertexId, heuristic: f64) -> GraphResult<()> {
        validate_heuristic(heuristic)?;
        let vertex = self.vertices.get_mut(&id).ok_or(GraphError::VertexNotFound(id))?;
        vertex.heuristic = heuristic;
        Ok(())
    }

    /// Remove a vertex together with every edge that touches it
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<Vertex> {
        let vertex = self.vertices.shift_remove(&id).ok_or(GraphError::VertexNotFound(id))?;
        self.name_index.remove(&vertex.name);

        let mut removed = self.outgoing.remove(&id).map_or(0, |edges| edges.len());
        for edges in self.outgoing.values_mut() {
            let before = edges.len();
            edges.retain(|e| e.target != id);
            removed += before - edges.len();
        }
        self.edge_count -= removed;

        debug!("Removed vertex {} and {} incident edges", id, removed);
        Ok(vertex)
    }

    /// Add a directed edge
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, cost: f64) -> GraphResult<()> {
        self.validate_edge(source, target, cost)?;
        self.push_edge(Edge::new(source, target, cost));
        debug!("Added edge {} -> {} ({})", source, target, cost);
        Ok(())
    }

    /// Add a connection in both directions
    ///
    /// Either both edges are added or neither is.
    pub fn add_undirected_edge(&mut self, a: VertexId, b: VertexId, cost: f64) -> GraphResult<()> {
        self.validate_edge(a, b, cost)?;
        self.validate_edge(b, a, cost)?;
        self.push_edge(Edge::new(a, b, cost));
        self.push_edge(Edge::new(b, a, cost));
        debug!("Added edge {} <-> {} ({})", a, b, cost);
        Ok(())
    }

    fn validate_edge(&self, source: VertexId, target: VertexId, cost: f64) -> GraphResult<()> {
        if !self.has_vertex(source) {
            return Err(GraphError::VertexNotFound(source));
        }
        if !self.has_vertex(target) {
            return Err(GraphError::VertexNotFound(target));
        }
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if !cost.is_finite() || cost < MIN_EDGE_COST {
            return Err(GraphError::InvalidCost(cost));
        }
        if self.edge_cost(source, target).is_some() {
            return Err(GraphError::EdgeAlreadyExists(source, target));
        }
        Ok(())
    }

    fn push_edge(&mut self, edge: Edge) {
        self.outgoing.entry(edge.source).or_default().push(edge);
        self.edge_count += 1;
    }

    /// Remove the directed edge `source -> target`
    pub fn remove_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<Edge> {
        let edges = self
            .outgoing
            .get_mut(&source)
            .ok_or(GraphError::EdgeNotFound(source, target))?;
        let pos = edges
            .iter()
            .position(|e| e.target == target)
            .ok_or(GraphError::EdgeNotFound(source, target))?;

        let edge = edges.remove(pos);
        self.edge_count -= 1;
        debug!("Removed edge {} -> {}", source, target);
        Ok(edge)
    }

    /// Get a vertex by ID
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Get a vertex by name
    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.name_index.get(name).and_then(|id| self.vertices.get(id))
    }

    /// Look up the ID behind a vertex name
    pub fn resolve(&self, name: &str) -> GraphResult<VertexId> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::VertexNameNotFound(name.to_string()))
    }

    /// Check if a vertex exists
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Outgoing edges of a vertex, in insertion order
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.outgoing.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Cost of the edge `source -> target`, if present
    pub fn edge_cost(&self, source: VertexId, target: VertexId) -> Option<f64> {
        self.neighbors(source)
            .iter()
            .find(|e| e.target == target)
            .map(|e| e.cost)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges, grouped by source in vertex order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.vertices.keys().flat_map(move |id| self.neighbors(*id).iter())
    }

    /// Get total number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Clear all data
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.name_index.clear();
        self.outgoing.clear();
        self.edge_count = 0;
    }
}

fn validate_heuristic(heuristic: f64) -> GraphResult<()> {
    if heuristic.is_finite() && heuristic >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidHeuristic(heuristic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertices() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 2.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();

        assert_ne!(a, b);
        assert_eq!(store.vertex_count(), 2);
        assert_eq!(store.resolve("B").unwrap(), b);
        assert_eq!(store.vertex(a).unwrap().heuristic, 2.0);
        assert_eq!(store.vertex_by_name("A").unwrap().id, a);
    }

    #[test]
    fn test_vertex_validation() {
        let mut store = GraphStore::new();
        store.add_vertex("A", 1.0).unwrap();

        assert_eq!(store.add_vertex("A", 1.0), Err(GraphError::DuplicateVertex("A".to_string())));
        assert_eq!(store.add_vertex("  ", 1.0), Err(GraphError::EmptyName));
        assert_eq!(store.add_vertex("B", -1.0), Err(GraphError::InvalidHeuristic(-1.0)));
        assert!(store.add_vertex("C", f64::NAN).is_err());
        assert_eq!(store.vertex_count(), 1);
    }

    #[test]
    fn test_edges_keep_insertion_order() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();
        let c = store.add_vertex("C", 0.0).unwrap();

        store.add_edge(a, c, 5.0).unwrap();
        store.add_edge(a, b, 1.0).unwrap();

        let targets: Vec<_> = store.neighbors(a).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![c, b]);
        assert_eq!(store.edge_cost(a, b), Some(1.0));
        assert_eq!(store.edge_cost(b, a), None);
        assert_eq!(store.edge_count(), 2);
    }

    #[test]
    fn test_edge_validation() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();
        let ghost = VertexId::new(99);

        assert_eq!(store.add_edge(a, b, 0.0), Err(GraphError::InvalidCost(0.0)));
        assert_eq!(store.add_edge(a, b, -3.0), Err(GraphError::InvalidCost(-3.0)));
        assert_eq!(store.add_edge(a, a, 2.0), Err(GraphError::SelfLoop(a)));
        assert_eq!(store.add_edge(a, ghost, 2.0), Err(GraphError::VertexNotFound(ghost)));

        store.add_edge(a, b, 2.0).unwrap();
        assert_eq!(store.add_edge(a, b, 4.0), Err(GraphError::EdgeAlreadyExists(a, b)));
        assert_eq!(store.edge_count(), 1);
    }

    #[test]
    fn test_undirected_edge_is_atomic() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();
        store.add_edge(b, a, 1.0).unwrap();

        // b -> a exists already, so nothing is added
        assert_eq!(store.add_undirected_edge(a, b, 3.0), Err(GraphError::EdgeAlreadyExists(b, a)));
        assert_eq!(store.edge_cost(a, b), None);

        let c = store.add_vertex("C", 0.0).unwrap();
        store.add_undirected_edge(a, c, 3.0).unwrap();
        assert_eq!(store.edge_cost(a, c), Some(3.0));
        assert_eq!(store.edge_cost(c, a), Some(3.0));
        assert_eq!(store.edge_count(), 3);
    }

    #[test]
    fn test_remove_vertex_drops_incident_edges() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();
        let c = store.add_vertex("C", 0.0).unwrap();
        store.add_undirected_edge(a, b, 1.0).unwrap();
        store.add_edge(b, c, 1.0).unwrap();
        store.add_edge(c, a, 1.0).unwrap();

        let removed = store.remove_vertex(b).unwrap();
        assert_eq!(removed.name, "B");
        assert!(!store.has_vertex(b));
        assert!(store.resolve("B").is_err());
        assert!(store.neighbors(a).is_empty());
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.remove_vertex(b), Err(GraphError::VertexNotFound(b)));

        // Names can be reused once freed
        let b2 = store.add_vertex("B", 0.0).unwrap();
        assert_ne!(b, b2);
    }

    #[test]
    fn test_remove_edge() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        let b = store.add_vertex("B", 0.0).unwrap();
        store.add_undirected_edge(a, b, 2.0).unwrap();

        let edge = store.remove_edge(a, b).unwrap();
        assert_eq!(edge.cost, 2.0);
        assert_eq!(store.edge_cost(b, a), Some(2.0));
        assert_eq!(store.edge_count(), 1);
        assert_eq!(store.remove_edge(a, b), Err(GraphError::EdgeNotFound(a, b)));
    }

    #[test]
    fn test_place_and_reweight_vertex() {
        let mut store = GraphStore::new();
        let a = store.add_vertex("A", 0.0).unwrap();
        store.place_vertex(a, 10.0, -4.0).unwrap();
        store.set_heuristic(a, 6.0).unwrap();

        let vertex = store.vertex(a).unwrap();
        assert_eq!(vertex.position(), (10.0, -4.0));
        assert_eq!(vertex.heuristic, 6.0);
        assert!(store.set_heuristic(a, f64::INFINITY).is_err());
        assert_eq!(store.place_vertex(VertexId::new(7), 0.0, 0.0), Err(GraphError::VertexNotFound(VertexId::new(7))));
    }

    #[test]
    fn test_sample_graph() {
        let store = GraphStore::sample();
        assert_eq!(store.vertex_count(), 8);
        assert_eq!(store.edge_count(), 22);

        let d = store.resolve("D").unwrap();
        let names: Vec<_> = store
            .neighbors(d)
            .iter()
            .map(|e| store.vertex(e.target).unwrap().name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C", "E", "G"]);
        assert_eq!(store.vertex_by_name("Goal").unwrap().heuristic, 0.0);

        let a = store.resolve("A").unwrap();
        let c = store.resolve("C").unwrap();
        let f = store.resolve("F").unwrap();
        assert_eq!(store.edge_cost(a, c), Some(3.0));
        assert_eq!(store.edge_cost(c, a), Some(3.0));
        assert_eq!(store.edge_cost(c, f), Some(4.0));
        assert_eq!(store.edge_cost(a, f), None);
    }

    #[test]
    fn test_clear() {
        let mut store = GraphStore::sample();
        store.clear();
        assert_eq!(store.vertex_count(), 0);
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.edges().count(), 0);
    }
}
