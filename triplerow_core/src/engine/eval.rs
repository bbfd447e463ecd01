use crate::engine::Evaluator;
use crate::logic::board::{Board, Cell, Player};

/// Counts length-3 runs for one player over every row, every column,
/// and the two full-length diagonals. Overlapping windows inside a
/// longer run each count (four in a row contains two runs of three).
///
/// The diagonal definitions assume a square board; on non-square
/// boards the diagonal scan is skipped.
#[must_use]
pub fn count_runs(board: &Board, player: Player) -> i32 {
    let mut count = 0;

    // Rows, left to right.
    for y in 0..board.height() {
        count += runs_in_line(board, player, (0..board.width()).map(|x| (x, y)));
    }

    // Columns, top to bottom.
    for x in 0..board.width() {
        count += runs_in_line(board, player, (0..board.height()).map(|y| (x, y)));
    }

    if board.width() == board.height() {
        let size = board.width();
        // Top-left to bottom-right.
        count += runs_in_line(board, player, (0..size).map(|i| (i, i)));
        // Top-right to bottom-left.
        count += runs_in_line(board, player, (0..size).map(|i| (i, size - 1 - i)));
    }

    count
}

fn runs_in_line<I>(board: &Board, player: Player, coords: I) -> i32
where
    I: Iterator<Item = (u8, u8)>,
{
    let line: Vec<Cell> = coords.map(|(x, y)| board.cell(x, y)).collect();
    let runs = line
        .windows(3)
        .filter(|w| w.iter().all(|&c| c == Cell::Taken(player)))
        .count();
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    {
        runs as i32
    }
}

/// Terminal/cutoff score from X's perspective: X's run count minus
/// O's. Higher favors X.
#[derive(Debug, Default)]
pub struct RunCountEvaluator;

impl Evaluator for RunCountEvaluator {
    fn evaluate(&self, board: &Board) -> i32 {
        count_runs(board, Player::X) - count_runs(board, Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Coordinate;

    fn place_all(board: &mut Board, player: Player, coords: &[(u8, u8)]) {
        for &(x, y) in coords {
            board.apply_move(Coordinate { x, y }, player);
        }
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::default();
        assert_eq!(count_runs(&board, Player::X), 0);
        assert_eq!(RunCountEvaluator.evaluate(&board), 0);
    }

    #[test]
    fn test_full_top_row_counts_three_runs() {
        let mut board = Board::default();
        place_all(
            &mut board,
            Player::X,
            &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
        );
        // Three overlapping windows of length 3 inside a run of 5.
        assert_eq!(count_runs(&board, Player::X), 3);
        assert_eq!(count_runs(&board, Player::O), 0);
    }

    #[test]
    fn test_four_in_a_column_counts_two_runs() {
        let mut board = Board::default();
        place_all(&mut board, Player::O, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        assert_eq!(count_runs(&board, Player::O), 2);
        assert_eq!(RunCountEvaluator.evaluate(&board), -2);
    }

    #[test]
    fn test_diagonal_runs() {
        let mut board = Board::default();
        // Three on the main diagonal, three on the anti-diagonal.
        place_all(&mut board, Player::X, &[(0, 0), (1, 1), (2, 2)]);
        place_all(&mut board, Player::O, &[(4, 0), (3, 1)]);
        place_all(&mut board, Player::O, &[(1, 3)]);
        assert_eq!(count_runs(&board, Player::X), 1);
        // O's anti-diagonal cells are not contiguous: (4,0),(3,1),(1,3)
        // leave a gap at (2,2), which X holds.
        assert_eq!(count_runs(&board, Player::O), 0);
    }

    #[test]
    fn test_mixed_runs_do_not_count() {
        let mut board = Board::default();
        place_all(&mut board, Player::X, &[(0, 0), (1, 0)]);
        place_all(&mut board, Player::O, &[(2, 0)]);
        place_all(&mut board, Player::X, &[(3, 0), (4, 0)]);
        assert_eq!(count_runs(&board, Player::X), 0);
        assert_eq!(count_runs(&board, Player::O), 0);
    }

    #[test]
    fn test_non_square_board_skips_diagonals() {
        let mut board = Board::new(5, 3);
        // Would be a diagonal run on a square board.
        place_all(&mut board, Player::X, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(count_runs(&board, Player::X), 0);

        // Rows and columns still count.
        place_all(&mut board, Player::O, &[(0, 1), (2, 1), (3, 1), (4, 1)]);
        // Row y=1 holds O at x=0,2,3,4 with X at (1,1): one window (2..4).
        assert_eq!(count_runs(&board, Player::O), 1);
    }
}
