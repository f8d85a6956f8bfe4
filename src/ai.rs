// Heuristic move selection for the computer player.
// Greedy one-ply: takes immediate wins and blocks immediate losses, but
// never looks deeper, so a fork can still beat it.

use crate::{
    board::Board,
    common::Mark,
    config::{CENTER, CORNERS, NUM_CELLS, WIN_LINES},
};
use rand::Rng;

/// First vacant index that would complete a line for `mark`, scanning
/// `WIN_LINES` in enumeration order. `None` when no line holds two of
/// `mark` with a vacant third cell.
pub fn winning_index(board: &Board, mark: Mark) -> Option<usize> {
    let owned = board.marks(mark);
    let vacant = board.vacancies();
    for line in WIN_LINES {
        let mut have = 0;
        let mut open = None;
        for &index in line.iter() {
            if owned.get(index).unwrap_or(false) {
                have += 1;
            } else if vacant.get(index).unwrap_or(false) {
                open = Some(index);
            }
        }
        if have == 2 {
            if let Some(index) = open {
                return Some(index);
            }
        }
    }
    None
}

/// Choose a move for `mark` by priority: complete an own line, block the
/// opponent's, take the center, take a random vacant corner, take any
/// random vacant cell. Each step short-circuits on the first applicable
/// choice.
///
/// The board must hold at least one vacant cell.
pub fn select_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> usize {
    if let Some(index) = winning_index(board, mark) {
        return index;
    }
    if let Some(index) = winning_index(board, mark.opponent()) {
        return index;
    }
    if board.is_vacant(CENTER).unwrap_or(false) {
        return CENTER;
    }
    let mut open = [0usize; NUM_CELLS];
    let mut n = 0;
    for &index in CORNERS.iter() {
        if board.is_vacant(index).unwrap_or(false) {
            open[n] = index;
            n += 1;
        }
    }
    if n == 0 {
        for index in board.vacancies().iter_set() {
            open[n] = index;
            n += 1;
        }
    }
    open[rng.random_range(0..n)]
}
