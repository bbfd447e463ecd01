use crate::logic::board::Board;
use crate::logic::game::GameState;
use serde::{Deserialize, Serialize};

pub mod config;
pub mod eval;
pub mod search;

/// A single cell address. `x` counts columns left to right, `y` rows
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SearchLimit {
    Depth(u8),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
}

pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

pub trait Searcher {
    fn search(&mut self, state: &GameState, limit: SearchLimit)
        -> Option<(Coordinate, SearchStats)>;
}
