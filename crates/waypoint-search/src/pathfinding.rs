//! Search strategies
//!
//! Breadth-first, depth-first, uniform-cost, A* and greedy best-first search
//! over a [`GraphView`]. Every strategy tests for the goal when a node is taken
//! off the frontier, and every node becomes the current node at most once.

use super::common::{GraphView, NodeId};
use super::error::SearchError;
use super::heap::MinHeap;
use super::result::{SearchResult, Traversal};
use super::strategy::Strategy;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// Run one strategy from `source` to `target`
pub fn run(
    view: &GraphView,
    strategy: Strategy,
    source: NodeId,
    target: NodeId,
) -> Result<SearchResult, SearchError> {
    debug!("Running {} search from {} to {}", strategy, source, target);
    let result = match strategy {
        Strategy::BreadthFirst => bfs(view, source, target),
        Strategy::DepthFirst => dfs(view, source, target),
        Strategy::UniformCost => uniform_cost(view, source, target),
        Strategy::AStar => astar(view, source, target),
        Strategy::Greedy => greedy(view, source, target),
    }?;
    debug!(
        "{} search finished: found={}, explored={}, cost={}",
        strategy, result.found, result.nodes_explored, result.path_cost
    );
    Ok(result)
}

/// Run several strategies independently on the rayon pool
///
/// Results are returned in the order of `strategies`.
pub fn run_all(
    view: &GraphView,
    strategies: &[Strategy],
    source: NodeId,
    target: NodeId,
) -> Result<Vec<SearchResult>, SearchError> {
    strategies
        .par_iter()
        .map(|&strategy| run(view, strategy, source, target))
        .collect()
}

fn resolve(view: &GraphView, source: NodeId, target: NodeId) -> Result<(usize, usize), SearchError> {
    let source_idx = view.index_of(source).ok_or(SearchError::NodeNotFound(source))?;
    let target_idx = view.index_of(target).ok_or(SearchError::NodeNotFound(target))?;
    Ok((source_idx, target_idx))
}

/// Breadth-First Search
///
/// Nodes are marked visited when enqueued. Shortest by edge count; the
/// reported cost is the sum of edge costs along the path found.
pub fn bfs(view: &GraphView, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
    let (source_idx, target_idx) = resolve(view, source, target)?;
    let mut trace = Traversal::new(Strategy::BreadthFirst, source_idx, target_idx);

    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();

    queue.push_back(source_idx);
    visited.insert(source_idx);

    while let Some(current_idx) = queue.pop_front() {
        if trace.visit(current_idx) {
            break;
        }

        for (next_idx, _) in view.neighbors(current_idx) {
            if visited.insert(next_idx) {
                trace.parent.insert(next_idx, Some(current_idx));
                queue.push_back(next_idx);
            }
        }
    }

    Ok(trace.finish(view, None))
}

/// Depth-First Search
///
/// Nodes are marked visited when popped, so a node may sit on the stack more
/// than once. Neighbors are pushed in reverse so they are explored in native
/// order. The predecessor is the node that first pushed it.
pub fn dfs(view: &GraphView, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
    let (source_idx, target_idx) = resolve(view, source, target)?;
    let mut trace = Traversal::new(Strategy::DepthFirst, source_idx, target_idx);

    let mut stack = vec![source_idx];
    let mut visited = HashSet::new();

    while let Some(current_idx) = stack.pop() {
        if !visited.insert(current_idx) {
            continue;
        }
        if trace.visit(current_idx) {
            break;
        }

        for (next_idx, _) in view.neighbors(current_idx).rev() {
            if visited.contains(&next_idx) {
                continue;
            }
            trace.parent.entry(next_idx).or_insert(Some(current_idx));
            stack.push(next_idx);
        }
    }

    Ok(trace.finish(view, None))
}

/// Uniform-Cost Search (Dijkstra)
pub fn uniform_cost(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
) -> Result<SearchResult, SearchError> {
    cost_ordered(view, Strategy::UniformCost, source, target)
}

/// A* Search
///
/// Frontier keyed by `g + h`. The cost is optimal when the heuristics never
/// overestimate; that is a property of the data and is not checked here.
pub fn astar(view: &GraphView, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
    cost_ordered(view, Strategy::AStar, source, target)
}

/// Shared loop of UCS and A*: relax on strictly cheaper cost, skip stale pops.
fn cost_ordered(
    view: &GraphView,
    strategy: Strategy,
    source: NodeId,
    target: NodeId,
) -> Result<SearchResult, SearchError> {
    let (source_idx, target_idx) = resolve(view, source, target)?;
    let mut trace = Traversal::new(strategy, source_idx, target_idx);
    let informed = strategy.is_informed();
    let priority = |g: f64, idx: usize| if informed { g + view.heuristic(idx) } else { g };

    let mut g_score: HashMap<usize, f64> = HashMap::new();
    let mut visited = HashSet::new();
    let mut frontier = MinHeap::with_capacity(view.edge_count() + 1);

    g_score.insert(source_idx, 0.0);
    frontier.insert(source_idx, priority(0.0, source_idx));

    while let Some((current_idx, _)) = frontier.extract_min() {
        if !visited.insert(current_idx) {
            continue;
        }
        if trace.visit(current_idx) {
            break;
        }

        let g = g_score.get(&current_idx).copied().unwrap_or(0.0);
        for (next_idx, weight) in view.neighbors(current_idx) {
            if weight < 0.0 || visited.contains(&next_idx) {
                continue;
            }

            let next_cost = g + weight;
            let improves = g_score
                .get(&next_idx)
                .map_or(true, |&known| next_cost < known);
            if improves {
                g_score.insert(next_idx, next_cost);
                trace.parent.insert(next_idx, Some(current_idx));
                frontier.insert(next_idx, priority(next_cost, next_idx));
            }
        }
    }

    Ok(trace.finish(view, Some(&g_score)))
}

/// Greedy Best-First Search
///
/// Frontier keyed by the heuristic alone. Predecessor and cost are fixed the
/// first time a node is discovered, so the path cost is not optimal in general.
pub fn greedy(view: &GraphView, source: NodeId, target: NodeId) -> Result<SearchResult, SearchError> {
    let (source_idx, target_idx) = resolve(view, source, target)?;
    let mut trace = Traversal::new(Strategy::Greedy, source_idx, target_idx);

    let mut cost: HashMap<usize, f64> = HashMap::new();
    let mut visited = HashSet::new();
    let mut frontier = MinHeap::with_capacity(view.node_count);

    cost.insert(source_idx, 0.0);
    frontier.insert(source_idx, view.heuristic(source_idx));

    while let Some((current_idx, _)) = frontier.extract_min() {
        if !visited.insert(current_idx) {
            continue;
        }
        if trace.visit(current_idx) {
            break;
        }

        let g = cost.get(&current_idx).copied().unwrap_or(0.0);
        for (next_idx, weight) in view.neighbors(current_idx) {
            if weight < 0.0 || trace.parent.contains_key(&next_idx) {
                continue;
            }
            cost.insert(next_idx, g + weight);
            trace.parent.insert(next_idx, Some(current_idx));
            frontier.insert(next_idx, view.heuristic(next_idx));
        }
    }

    Ok(trace.finish(view, Some(&cost)))
}
