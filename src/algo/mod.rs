//! Search engine
//!
//! Strategies are implemented in the `waypoint-search` crate and run on a
//! dense [`GraphView`]. This module is the adapter layer: it projects a
//! [`GraphStore`] into a view and translates between vertex names and ids.

use crate::config::SearchConfig;
use crate::graph::{GraphError, GraphStore, VertexId};
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use waypoint_search::{GraphView, NodeId, SearchResult};

// Re-export the search core
pub use waypoint_search::{SearchError, Strategy};

#[derive(Error, Debug, PartialEq)]
pub enum AlgoError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// Build a GraphView from the store for search execution
///
/// Dense indices follow vertex insertion order and every adjacency row keeps
/// the store's edge order.
pub fn build_view(store: &GraphStore) -> GraphView {
    let index_to_node: Vec<NodeId> = store.vertices().map(|v| v.id.as_u64()).collect();
    let node_to_index: HashMap<VertexId, usize> = store
        .vertices()
        .enumerate()
        .map(|(idx, v)| (v.id, idx))
        .collect();

    let node_count = index_to_node.len();
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut weights: Vec<Vec<f64>> = vec![Vec::new(); node_count];

    for (u_idx, vertex) in store.vertices().enumerate() {
        for edge in store.neighbors(vertex.id) {
            if let Some(&v_idx) = node_to_index.get(&edge.target) {
                outgoing[u_idx].push(v_idx);
                weights[u_idx].push(edge.cost);
            }
        }
    }

    let heuristics = store.vertices().map(|v| v.heuristic).collect();

    GraphView::from_adjacency_list(index_to_node, outgoing, Some(weights), Some(heuristics))
}

/// A search result expressed in vertex names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub strategy: Strategy,
    pub start: String,
    pub goal: String,
    pub found: bool,
    pub path: Vec<String>,
    pub path_cost: f64,
    pub nodes_explored: usize,
    pub explored_order: Vec<String>,
    pub time_taken: Duration,
}

impl SearchOutcome {
    fn from_result(store: &GraphStore, result: SearchResult) -> Self {
        let name = |id: NodeId| {
            store
                .vertex(VertexId::new(id))
                .map(|v| v.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        SearchOutcome {
            strategy: result.strategy,
            start: name(result.source),
            goal: name(result.target),
            found: result.found,
            path: result.path.iter().map(|&id| name(id)).collect(),
            path_cost: result.path_cost,
            nodes_explored: result.nodes_explored,
            explored_order: result.explored_order.iter().map(|&id| name(id)).collect(),
            time_taken: result.time_taken,
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Runs strategies against one graph
///
/// The view is built once; the store stays borrowed, and therefore unchanged,
/// for the engine's lifetime.
pub struct SearchEngine<'a> {
    store: &'a GraphStore,
    view: GraphView,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a GraphStore) -> Self {
        Self::with_config(store, SearchConfig::default())
    }

    pub fn with_config(store: &'a GraphStore, config: SearchConfig) -> Self {
        let view = build_view(store);
        debug!(
            "Built search view: {} vertices, {} edges",
            view.node_count,
            view.edge_count()
        );
        Self { store, view, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    fn endpoints(&self, start: &str, goal: &str) -> AlgoResult<(NodeId, NodeId)> {
        let start = self.store.resolve(start)?;
        let goal = self.store.resolve(goal)?;
        Ok((start.as_u64(), goal.as_u64()))
    }

    /// Run one strategy between two named vertices
    pub fn run(&self, strategy: Strategy, start: &str, goal: &str) -> AlgoResult<SearchOutcome> {
        let (source, target) = self.endpoints(start, goal)?;
        let result = waypoint_search::run(&self.view, strategy, source, target)?;
        Ok(SearchOutcome::from_result(self.store, result))
    }

    /// Run the strategy named by `selector`, e.g. `"bfs"` or `"a-star"`
    pub fn run_named(&self, selector: &str, start: &str, goal: &str) -> AlgoResult<SearchOutcome> {
        let strategy: Strategy = selector.parse()?;
        self.run(strategy, start, goal)
    }

    /// Run every configured strategy between the same two vertices
    pub fn compare(&self, start: &str, goal: &str) -> AlgoResult<Vec<SearchOutcome>> {
        let (source, target) = self.endpoints(start, goal)?;
        let strategies = &self.config.strategies;

        let results = if self.config.parallel {
            waypoint_search::run_all(&self.view, strategies, source, target)?
        } else {
            strategies
                .iter()
                .map(|&strategy| waypoint_search::run(&self.view, strategy, source, target))
                .collect::<Result<Vec<_>, _>>()?
        };

        info!(
            "Compared {} strategies from '{}' to '{}'",
            results.len(),
            start,
            goal
        );
        Ok(results
            .into_iter()
            .map(|result| SearchOutcome::from_result(self.store, result))
            .collect())
    }
}
