//! Strategy selector
//!
//! The set of strategies is closed; dispatch happens through [`Strategy`]
//! rather than trait objects.

use super::error::SearchError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    UniformCost,
    AStar,
    Greedy,
}

impl Strategy {
    /// All strategies, uninformed first
    pub const ALL: [Strategy; 5] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::Greedy,
    ];

    /// Canonical selector string
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::UniformCost => "uniform-cost",
            Strategy::AStar => "a-star",
            Strategy::Greedy => "greedy",
        }
    }

    /// Whether the strategy reads vertex heuristics
    pub fn is_informed(&self) -> bool {
        matches!(self, Strategy::AStar | Strategy::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "depth-first" | "dfs" => Ok(Strategy::DepthFirst),
            "uniform-cost" | "ucs" | "dijkstra" => Ok(Strategy::UniformCost),
            "a-star" | "astar" | "a*" => Ok(Strategy::AStar),
            "greedy" | "greedy-best-first" | "best-first" => Ok(Strategy::Greedy),
            _ => Err(SearchError::UnknownStrategy(s.to_string())),
        }
    }
}
