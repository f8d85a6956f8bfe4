/// An index triple that wins the game when fully owned by one player.
pub type WinLine = [usize; 3];

pub const NUM_CELLS: usize = 9;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// The eight winning lines in fixed enumeration order: rows, columns,
/// diagonals. Win detection and move selection report the first match in
/// this order.
pub const WIN_LINES: [WinLine; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Default pause before the computer replies, as turn-taking feedback for
/// the human player.
pub const COMPUTER_MOVE_DELAY_MS: u64 = 400;
