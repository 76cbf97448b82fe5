//! Search configuration

use crate::graph::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use waypoint_search::Strategy;

/// Settings for [`SearchEngine::compare`](crate::algo::SearchEngine::compare)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Strategies to run, in report order
    pub strategies: Vec<Strategy>,
    /// Run the strategies on the rayon thread pool
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Restrict the comparison to `strategies`
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
