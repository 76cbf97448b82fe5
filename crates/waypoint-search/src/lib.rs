pub mod common;
pub mod error;
pub mod heap;
pub mod pathfinding;
pub mod result;
pub mod strategy;

pub use common::{GraphView, NodeId};
pub use error::SearchError;
pub use heap::MinHeap;
pub use pathfinding::{astar, bfs, dfs, greedy, run, run_all, uniform_cost};
pub use result::SearchResult;
pub use strategy::Strategy;
