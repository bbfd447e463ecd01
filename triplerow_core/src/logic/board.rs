use crate::engine::Coordinate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

/// Result of a cell query. `Off` is only ever produced by the accessor
/// for out-of-bounds coordinates; it is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Taken(Player),
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds,
    Occupied,
    GameFinished,
}

/// One game position. Cells are stored densely; `to_move` is
/// informational only — the search passes the acting player explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Option<Player>>,
    pub to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(5, 5)
    }
}

impl Board {
    /// Creates an empty board. Both dimensions must be positive.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        debug_assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            to_move: Player::X,
        }
    }

    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    const fn index(&self, x: u8, y: u8) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Bounds-checked cell query: `Empty` or `Taken` for in-bounds
    /// coordinates, `Off` for everything else.
    #[must_use]
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        if x >= self.width || y >= self.height {
            return Cell::Off;
        }
        match self.cells.get(self.index(x, y)).copied().flatten() {
            Some(player) => Cell::Taken(player),
            None => Cell::Empty,
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All empty in-bounds coordinates, outer loop over `x` ascending,
    /// inner loop over `y` ascending. The order is part of the engine's
    /// observable behavior (it decides ties in move selection), so it
    /// must not change.
    #[must_use]
    pub fn available_moves(&self) -> Vec<Coordinate> {
        let mut moves = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                if self.cell(x, y) == Cell::Empty {
                    moves.push(Coordinate { x, y });
                }
            }
        }
        moves
    }

    /// Checks that a move targets an empty in-bounds cell.
    pub fn check_move(&self, coord: Coordinate) -> Result<(), MoveError> {
        match self.cell(coord.x, coord.y) {
            Cell::Empty => Ok(()),
            Cell::Taken(_) => Err(MoveError::Occupied),
            Cell::Off => Err(MoveError::OutOfBounds),
        }
    }

    /// Occupies a cell. The caller guarantees the coordinate came from
    /// `available_moves` (or passed `check_move`); the search relies on
    /// this being infallible in its inner loop.
    pub fn apply_move(&mut self, coord: Coordinate, player: Player) {
        debug_assert!(self.check_move(coord).is_ok(), "illegal move {coord:?}");
        let idx = self.index(coord.x, coord.y);
        if let Some(slot) = self.cells.get_mut(idx) {
            *slot = Some(player);
        }
    }

    /// Restores a cell to `Empty`, exactly inverting `apply_move`.
    pub fn undo_move(&mut self, coord: Coordinate) {
        let idx = self.index(coord.x, coord.y);
        if let Some(slot) = self.cells.get_mut(idx) {
            debug_assert!(slot.is_some(), "undo of an empty cell {coord:?}");
            *slot = None;
        }
    }
}
