//! Common types: player marks, game modes, statuses, and move rejections.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two player marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark of the other player.
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// Human-vs-human or human-vs-computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvC,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

impl GameStatus {
    /// Returns `true` for the terminal states `Won` and `Drawn`.
    pub const fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Reasons a move is rejected. These are ignorable user-input errors, not
/// fatal conditions: the engine state is left unchanged and callers may
/// simply drop them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Underlying bitboard error (the index is out of range).
    BitBoard(BitBoardError),
    /// The cell is already marked.
    Occupied,
    /// The game has already been won or drawn.
    Finished,
    /// It is the computer's turn, not the human's.
    OutOfTurn,
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        MoveError::BitBoard(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            MoveError::Occupied => write!(f, "Cell is already marked"),
            MoveError::Finished => write!(f, "Game is already over"),
            MoveError::OutOfTurn => write!(f, "It is the computer's turn"),
        }
    }
}
