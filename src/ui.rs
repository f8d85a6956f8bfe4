#![cfg(feature = "std")]
//! Terminal rendering and input parsing for the interactive game.

use crate::{
    common::{GameStatus, Mark},
    config::{WinLine, NUM_CELLS},
    game::GameState,
};
use std::fmt::Write as _;
use std::string::String;

/// Parse a cell reference: row letter plus column digit (`B2`), or a single
/// digit `1..=9` counting row-major from the top-left.
pub fn parse_cell(input: &str) -> Option<usize> {
    let input = input.trim();
    let mut chars = input.chars();
    let first = chars.next()?;
    match chars.next() {
        None => {
            let d = first.to_digit(10)?;
            if (1..=9).contains(&d) {
                Some(d as usize - 1)
            } else {
                None
            }
        }
        Some(second) => {
            if chars.next().is_some() {
                return None;
            }
            let row = (first.to_ascii_uppercase() as u8).wrapping_sub(b'A') as usize;
            let col = second.to_digit(10)? as usize;
            if row >= 3 || !(1..=3).contains(&col) {
                return None;
            }
            Some(row * 3 + col - 1)
        }
    }
}

/// Name a cell index the way `parse_cell` reads it, e.g. `4` -> `"B2"`.
pub fn cell_name(index: usize) -> String {
    let row = (b'A' + (index / 3) as u8) as char;
    std::format!("{}{}", row, index % 3 + 1)
}

/// Render the grid with column digits and row letters. Cells on the
/// highlighted line are bracketed.
pub fn render_board(cells: &[Option<Mark>; NUM_CELLS], highlight: Option<WinLine>) -> String {
    let mut out = String::new();
    out.push_str("    1  2  3\n");
    for r in 0..3 {
        let _ = write!(out, " {} ", (b'A' + r as u8) as char);
        for c in 0..3 {
            let index = r * 3 + c;
            let ch = match cells[index] {
                Some(Mark::X) => 'X',
                Some(Mark::O) => 'O',
                None => '.',
            };
            if highlight.is_some_and(|line| line.contains(&index)) {
                let _ = write!(out, "[{}]", ch);
            } else {
                let _ = write!(out, " {} ", ch);
            }
        }
        out.push('\n');
    }
    out
}

/// Print the board for `state`, highlighting the winning line if any.
pub fn print_board(state: &GameState) {
    std::print!("{}", render_board(&state.cells, state.winning_line));
}

/// The status line shown after every action.
pub fn status_line(state: &GameState) -> String {
    match state.status {
        GameStatus::InProgress => std::format!("Player {}'s turn", state.current),
        GameStatus::Won(mark) => std::format!("Player {} wins!", mark),
        GameStatus::Drawn => String::from("It's a draw!"),
    }
}
