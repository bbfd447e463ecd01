use crate::engine::config::{EngineConfig, SearchAlgorithm};
use crate::engine::eval::RunCountEvaluator;
use crate::engine::{Coordinate, Evaluator, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Player};
use crate::logic::game::GameState;
use log::debug;
use std::sync::Arc;
use std::time::Instant;

/// Scores are small run-count differences; this bound stands in for
/// infinity in the alpha/beta windows.
const SCORE_INFINITY: i32 = 1_000_000;

/// Depth-limited adversarial search over hypothetical boards.
///
/// The recursion mutates a single working board and undoes each move
/// on the way back up; callers never observe the mutation because the
/// public entry points clone the input board first. No transposition
/// table or move ordering is used: alpha-beta must return exactly the
/// minimax value, and those mechanisms could change it.
pub struct SearchEngine {
    config: Arc<EngineConfig>,
    evaluator: RunCountEvaluator,
    nodes_searched: u64,
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            evaluator: RunCountEvaluator,
            nodes_searched: 0,
        }
    }

    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.config = config;
    }

    #[must_use]
    pub const fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Plain minimax. X maximizes, O minimizes; the score is the
    /// evaluation at depth zero or on a full board.
    pub fn minimax(&mut self, board: &mut Board, depth: u8, maximizing: bool) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 || board.is_full() {
            return self.evaluator.evaluate(board);
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            // Unreachable given the fullness check above, but an empty
            // move list must still evaluate rather than fail.
            return self.evaluator.evaluate(board);
        }

        if maximizing {
            let mut max_eval = -SCORE_INFINITY;
            for mv in moves {
                board.apply_move(mv, Player::X);
                let eval = self.minimax(board, depth - 1, false);
                board.undo_move(mv);
                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = SCORE_INFINITY;
            for mv in moves {
                board.apply_move(mv, Player::O);
                let eval = self.minimax(board, depth - 1, true);
                board.undo_move(mv);
                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }

    /// Minimax with alpha-beta pruning. Returns the same value as
    /// `minimax` for every input; pruning only skips subtrees that
    /// cannot influence the result.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes_searched += 1;

        if depth == 0 || board.is_full() {
            return self.evaluator.evaluate(board);
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return self.evaluator.evaluate(board);
        }

        if maximizing {
            let mut max_eval = -SCORE_INFINITY;
            for mv in moves {
                board.apply_move(mv, Player::X);
                let eval = self.alpha_beta(board, depth - 1, alpha, beta, false);
                board.undo_move(mv);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = SCORE_INFINITY;
            for mv in moves {
                board.apply_move(mv, Player::O);
                let eval = self.alpha_beta(board, depth - 1, alpha, beta, true);
                board.undo_move(mv);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Picks the move with the strictly best score for `player`; ties
    /// keep the first candidate in enumeration order. `None` means the
    /// board is full.
    pub fn best_move(&mut self, board: &Board, player: Player, depth: u8) -> Option<Coordinate> {
        let mut working = board.clone();
        // After the candidate move the opponent acts first; the
        // opponent maximizes iff it is X.
        let opponent_maximizes = player == Player::O;

        let mut best_val = match player {
            Player::X => -SCORE_INFINITY,
            Player::O => SCORE_INFINITY,
        };
        let mut best_move = None;

        for mv in board.available_moves() {
            working.apply_move(mv, player);
            let val = match self.config.algorithm {
                SearchAlgorithm::AlphaBeta => self.alpha_beta(
                    &mut working,
                    depth,
                    -SCORE_INFINITY,
                    SCORE_INFINITY,
                    opponent_maximizes,
                ),
                SearchAlgorithm::Minimax => self.minimax(&mut working, depth, opponent_maximizes),
            };
            working.undo_move(mv);

            let improves = match player {
                Player::X => val > best_val,
                Player::O => val < best_val,
            };
            if improves {
                best_val = val;
                best_move = Some(mv);
            }
        }

        best_move
    }
}

impl Searcher for SearchEngine {
    fn search(
        &mut self,
        state: &GameState,
        limit: SearchLimit,
    ) -> Option<(Coordinate, SearchStats)> {
        let SearchLimit::Depth(depth) = limit;
        self.nodes_searched = 0;
        let start = Instant::now();

        let mv = self.best_move(&state.board, state.turn, depth)?;

        let elapsed = start.elapsed();
        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        debug!(
            "search player={} depth={} nodes={} time_ms={}",
            state.turn.as_char(),
            stats.depth,
            stats.nodes,
            stats.time_ms
        );
        Some((mv, stats))
    }
}
