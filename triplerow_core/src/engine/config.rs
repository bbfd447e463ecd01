use serde::{Deserialize, Serialize};

/// Reference search depth, in plies.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    AlphaBeta,
    Minimax,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed search depth in plies. The sole resource bound of the
    /// engine; there is no time limit.
    pub search_depth: u8,
    /// Scoring algorithm used at the root. Alpha-beta and minimax
    /// return identical values; minimax exists for head-to-head
    /// comparison and testing.
    pub algorithm: SearchAlgorithm,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            algorithm: SearchAlgorithm::AlphaBeta,
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
