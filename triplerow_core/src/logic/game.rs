use crate::engine::eval::count_runs;
use crate::engine::Coordinate;
use crate::logic::board::{Board, MoveError, Player};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won(Player),
    Tie,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub turn: Player,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(5, 5)
    }

    #[must_use]
    pub fn with_size(width: u8, height: u8) -> Self {
        Self {
            board: Board::new(width, height),
            turn: Player::X,
            status: GameStatus::Playing,
        }
    }

    /// Plays a move for the player whose turn it is. Rejects moves on
    /// occupied or out-of-bounds cells and moves after the game ended.
    pub fn make_move(&mut self, coord: Coordinate) -> Result<(), MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameFinished);
        }

        self.board.check_move(coord)?;
        self.board.apply_move(coord, self.turn);

        self.turn = self.turn.opposite();
        self.board.to_move = self.turn;
        self.update_status();

        Ok(())
    }

    /// Run counts for (X, O), derived from the board on demand.
    #[must_use]
    pub fn scores(&self) -> (i32, i32) {
        (
            count_runs(&self.board, Player::X),
            count_runs(&self.board, Player::O),
        )
    }

    fn update_status(&mut self) {
        if !self.board.is_full() {
            return;
        }
        // Strictly greater run count wins; equal counts tie.
        let (x_runs, o_runs) = self.scores();
        self.status = if x_runs > o_runs {
            GameStatus::Won(Player::X)
        } else if o_runs > x_runs {
            GameStatus::Won(Player::O)
        } else {
            GameStatus::Tie
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_alternates_turns() {
        let mut game = GameState::new();
        assert_eq!(game.turn, Player::X);

        game.make_move(Coordinate { x: 0, y: 0 }).unwrap();
        assert_eq!(game.turn, Player::O);
        assert_eq!(game.board.to_move, Player::O);

        game.make_move(Coordinate { x: 1, y: 0 }).unwrap();
        assert_eq!(game.turn, Player::X);
    }

    #[test]
    fn test_rejects_occupied_cell() {
        let mut game = GameState::new();
        game.make_move(Coordinate { x: 2, y: 2 }).unwrap();

        let result = game.make_move(Coordinate { x: 2, y: 2 });
        assert_eq!(result, Err(MoveError::Occupied));
        // Turn unchanged after a rejected move.
        assert_eq!(game.turn, Player::O);
    }

    #[test]
    fn test_tie_on_full_board() {
        // 1x3 board: X O X leaves both players with zero runs.
        let mut game = GameState::with_size(3, 1);
        game.make_move(Coordinate { x: 0, y: 0 }).unwrap();
        game.make_move(Coordinate { x: 1, y: 0 }).unwrap();
        game.make_move(Coordinate { x: 2, y: 0 }).unwrap();

        assert_eq!(game.status, GameStatus::Tie);
        assert_eq!(game.scores(), (0, 0));
        assert_eq!(
            game.make_move(Coordinate { x: 0, y: 0 }),
            Err(MoveError::GameFinished)
        );
    }

    #[test]
    fn test_equal_runs_tie() {
        // 3x2 board, X takes the top row and O the bottom: one
        // horizontal run each, mixed columns, so the game ties.
        let mut game = GameState::with_size(3, 2);
        game.make_move(Coordinate { x: 0, y: 0 }).unwrap(); // X
        game.make_move(Coordinate { x: 0, y: 1 }).unwrap(); // O
        game.make_move(Coordinate { x: 1, y: 0 }).unwrap(); // X
        game.make_move(Coordinate { x: 1, y: 1 }).unwrap(); // O
        game.make_move(Coordinate { x: 2, y: 0 }).unwrap(); // X completes its row
        game.make_move(Coordinate { x: 2, y: 1 }).unwrap(); // O completes its row

        // Both end with one horizontal run; columns are mixed. Tie.
        assert_eq!(game.status, GameStatus::Tie);
        assert_eq!(game.scores(), (1, 1));
    }

    #[test]
    fn test_win_detected_when_board_fills() {
        // Assemble a nearly-full 3x1 board where X already owns two
        // cells, then let X complete the run through make_move.
        let mut game = GameState::with_size(3, 1);
        game.board.apply_move(Coordinate { x: 0, y: 0 }, Player::X);
        game.board.apply_move(Coordinate { x: 1, y: 0 }, Player::X);
        game.turn = Player::X;

        game.make_move(Coordinate { x: 2, y: 0 }).unwrap();
        assert_eq!(game.status, GameStatus::Won(Player::X));
        assert_eq!(game.scores(), (1, 0));
    }
}
