//! Game board state, tracking each player's marks in a `BitBoard`.

use crate::bitboard::{BitBoard, BitBoardError};
use crate::common::{Mark, MoveError};
use crate::config::{WinLine, NUM_CELLS, WIN_LINES};

type BB = BitBoard<u16, NUM_CELLS>;

/// The 3×3 grid, cells addressed by flat index 0..9, row-major. X's and O's
/// marks are kept in two disjoint bitboards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    xs: BB,
    os: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            xs: empty,
            os: empty,
        }
    }

    /// Bitboard of the cells owned by `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.xs,
            Mark::O => self.os,
        }
    }

    /// Bitboard of all marked cells.
    pub fn occupied(&self) -> BB {
        self.xs | self.os
    }

    /// Bitboard of all vacant cells.
    pub fn vacancies(&self) -> BB {
        !self.occupied()
    }

    /// The mark at `index`, or `None` for a vacant cell.
    pub fn cell(&self, index: usize) -> Result<Option<Mark>, BitBoardError> {
        if self.xs.get(index)? {
            Ok(Some(Mark::X))
        } else if self.os.get(index)? {
            Ok(Some(Mark::O))
        } else {
            Ok(None)
        }
    }

    /// Returns `true` when the cell at `index` carries no mark.
    pub fn is_vacant(&self, index: usize) -> Result<bool, BitBoardError> {
        Ok(self.cell(index)?.is_none())
    }

    /// Returns `true` when every cell is marked.
    pub fn is_full(&self) -> bool {
        self.occupied().count_ones() == NUM_CELLS
    }

    /// Number of cells owned by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.marks(mark).count_ones()
    }

    /// Place `mark` on the vacant cell at `index`.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if !self.is_vacant(index)? {
            return Err(MoveError::Occupied);
        }
        match mark {
            Mark::X => self.xs.set(index)?,
            Mark::O => self.os.set(index)?,
        }
        Ok(())
    }

    /// First line fully owned by `mark`, scanning `WIN_LINES` in enumeration
    /// order.
    pub fn winning_line(&self, mark: Mark) -> Option<WinLine> {
        let owned = self.marks(mark);
        WIN_LINES
            .into_iter()
            .find(|line| line.iter().all(|&i| owned.get(i).unwrap_or(false)))
    }

    /// Copy of all cell values for rendering.
    pub fn snapshot(&self) -> [Option<Mark>; NUM_CELLS] {
        core::array::from_fn(|i| self.cell(i).unwrap_or(None))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
