//! Search engine for 5x5 tic-tac-toe scored by 3-in-a-row run counts.
//!
//! The game is played to a full board; the winner is the player with
//! the strictly higher number of length-3 runs (rows, columns and the
//! two main diagonals), overlapping runs counted separately.

pub mod engine;
pub mod logic;
