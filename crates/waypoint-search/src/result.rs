//! Search results and path reconstruction

use super::common::{GraphView, NodeId};
use super::strategy::Strategy;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Outcome of a single search run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub strategy: Strategy,
    pub source: NodeId,
    pub target: NodeId,
    pub found: bool,
    /// Nodes from source to target, empty when the target was not reached
    pub path: Vec<NodeId>,
    pub path_cost: f64,
    pub nodes_explored: usize,
    /// Nodes in the order they were taken off the frontier
    pub explored_order: Vec<NodeId>,
    pub time_taken: Duration,
}

impl SearchResult {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Traversal state owned by one search invocation
///
/// Holds the predecessor map (source maps to `None`) and the explored order,
/// and turns them into a [`SearchResult`] once the frontier loop ends.
pub(crate) struct Traversal {
    strategy: Strategy,
    source: usize,
    target: usize,
    pub(crate) parent: HashMap<usize, Option<usize>>,
    explored: Vec<usize>,
    found: bool,
    started: Instant,
}

impl Traversal {
    pub(crate) fn new(strategy: Strategy, source: usize, target: usize) -> Self {
        let mut parent = HashMap::new();
        parent.insert(source, None);
        Self {
            strategy,
            source,
            target,
            parent,
            explored: Vec::new(),
            found: false,
            started: Instant::now(),
        }
    }

    /// Record `idx` as the current node. Returns true when it is the goal.
    pub(crate) fn visit(&mut self, idx: usize) -> bool {
        self.explored.push(idx);
        if idx == self.target {
            self.found = true;
        }
        self.found
    }

    /// Build the result. With `costs`, the path cost is the target's entry;
    /// otherwise edge costs along the path are summed from the view.
    pub(crate) fn finish(self, view: &GraphView, costs: Option<&HashMap<usize, f64>>) -> SearchResult {
        let time_taken = self.started.elapsed();

        let path = if self.found {
            reconstruct_path(&self.parent, self.target)
        } else {
            Vec::new()
        };

        let path_cost = if path.is_empty() {
            0.0
        } else {
            match costs {
                Some(costs) => costs.get(&self.target).copied().unwrap_or(0.0),
                None => sum_edge_costs(view, &path),
            }
        };

        SearchResult {
            strategy: self.strategy,
            source: view.index_to_node[self.source],
            target: view.index_to_node[self.target],
            found: self.found,
            path: path.iter().map(|&idx| view.index_to_node[idx]).collect(),
            path_cost,
            nodes_explored: self.explored.len(),
            explored_order: self.explored.iter().map(|&idx| view.index_to_node[idx]).collect(),
            time_taken,
        }
    }
}

/// Walk the predecessor chain back from `target` and return it source-first
fn reconstruct_path(parent: &HashMap<usize, Option<usize>>, target: usize) -> Vec<usize> {
    if !parent.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut curr = target;
    while let Some(&Some(prev)) = parent.get(&curr) {
        path.push(prev);
        curr = prev;
    }
    path.reverse();
    path
}

fn sum_edge_costs(view: &GraphView, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| view.edge_cost(pair[0], pair[1]).unwrap_or(0.0))
        .fold(0.0, |total, cost| total + cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> GraphView {
        // 1 -(4)-> 2 -(6)-> 3
        GraphView::from_adjacency_list(
            vec![1, 2, 3],
            vec![vec![1], vec![2], vec![]],
            Some(vec![vec![4.0], vec![6.0], vec![]]),
            None,
        )
    }

    #[test]
    fn test_reconstruct_path() {
        let mut parent = HashMap::new();
        parent.insert(0, None);
        parent.insert(1, Some(0));
        parent.insert(2, Some(1));
        assert_eq!(reconstruct_path(&parent, 2), vec![0, 1, 2]);
        assert_eq!(reconstruct_path(&parent, 0), vec![0]);
        assert!(reconstruct_path(&parent, 5).is_empty());
    }

    #[test]
    fn test_finish_sums_edges_without_cost_map() {
        let view = chain();
        let mut trace = Traversal::new(Strategy::BreadthFirst, 0, 2);
        trace.parent.insert(1, Some(0));
        trace.parent.insert(2, Some(1));
        assert!(!trace.visit(0));
        assert!(!trace.visit(1));
        assert!(trace.visit(2));

        let result = trace.finish(&view, None);
        assert!(result.found);
        assert_eq!(result.path, vec![1, 2, 3]);
        assert_eq!(result.path_cost, 10.0);
        assert_eq!(result.hops(), 2);
        assert_eq!(result.nodes_explored, 3);
        assert_eq!(result.explored_order, vec![1, 2, 3]);
    }

    #[test]
    fn test_finish_prefers_cost_map() {
        let view = chain();
        let mut trace = Traversal::new(Strategy::UniformCost, 0, 1);
        trace.parent.insert(1, Some(0));
        trace.visit(0);
        trace.visit(1);

        let mut costs = HashMap::new();
        costs.insert(1, 4.0);
        let result = trace.finish(&view, Some(&costs));
        assert_eq!(result.path, vec![1, 2]);
        assert_eq!(result.path_cost, 4.0);
    }

    #[test]
    fn test_not_found_has_empty_path_and_zero_cost() {
        let view = chain();
        let mut trace = Traversal::new(Strategy::DepthFirst, 2, 0);
        trace.visit(2);

        let result = trace.finish(&view, None);
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.path_cost, 0.0);
        assert_eq!(result.explored_order, vec![3]);
        assert_eq!(result.hops(), 0);
    }
}
