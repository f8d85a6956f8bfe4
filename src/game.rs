use crate::{
    ai,
    board::Board,
    common::{GameMode, GameStatus, Mark, MoveError},
    config::{WinLine, NUM_CELLS},
};
use rand::Rng;

/// Read-only snapshot of the current state, for rendering and assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub cells: [Option<Mark>; NUM_CELLS],
    pub current: Mark,
    pub status: GameStatus,
    pub mode: GameMode,
    pub winning_line: Option<WinLine>,
}

/// What an applied move changed, returned to the caller for rendering and
/// accessibility announcements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    /// The cell that was marked.
    pub index: usize,
    /// The mark placed on it.
    pub mark: Mark,
    pub event: GameEvent,
}

/// Terminal evaluation of a move, in the order win, draw, turn change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The turn passed to the other player.
    TurnPassed(Mark),
    /// The move completed `line` and won the game. The turn does not
    /// advance.
    Won { winner: Mark, line: WinLine },
    /// The move filled the last cell without completing a line.
    Drawn,
}

/// Core game logic holding the board, turn order, and mode. No I/O;
/// randomness enters only through the `Rng` handed to the computer's turn.
pub struct GameEngine {
    board: Board,
    current: Mark,
    status: GameStatus,
    mode: GameMode,
    winning_line: Option<WinLine>,
}

impl GameEngine {
    /// Create an engine holding a fresh game: empty board, X to move.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            status: GameStatus::InProgress,
            mode,
            winning_line: None,
        }
    }

    /// Reset to a fresh game in `mode`. This is the only way out of a
    /// terminal state.
    pub fn start(&mut self, mode: GameMode) {
        *self = Self::new(mode);
    }

    /// Reset to a fresh game, keeping the current mode.
    pub fn restart(&mut self) {
        self.start(self.mode);
    }

    /// Change mode. Equivalent to `start`: an in-progress game is
    /// discarded, mirroring the mode selector's observed behavior.
    pub fn switch_mode(&mut self, mode: GameMode) {
        self.start(mode);
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is. Unchanged once the game is over.
    pub fn current_player(&self) -> Mark {
        self.current
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The configured mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The line that won the game, if any, for highlighting.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: self.board.snapshot(),
            current: self.current,
            status: self.status,
            mode: self.mode,
            winning_line: self.winning_line,
        }
    }

    /// Returns `true` when the engine is waiting on the computer's reply.
    /// The frontend should schedule `play_computer_turn` when this holds.
    pub fn computer_to_move(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.mode == GameMode::PvC
            && self.current == Mark::O
    }

    /// Apply a human move on the cell at `index`. Rejected with the state
    /// unchanged when the game is over, when it is the computer's turn, or
    /// when the cell is unavailable.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::Finished);
        }
        if self.computer_to_move() {
            return Err(MoveError::OutOfTurn);
        }
        self.play(index)
    }

    /// Select and apply the computer's move. Rejected unless
    /// `computer_to_move` holds.
    pub fn play_computer_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<MoveRecord, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::Finished);
        }
        if !self.computer_to_move() {
            return Err(MoveError::OutOfTurn);
        }
        let index = ai::select_move(&self.board, self.current, rng);
        self.play(index)
    }

    fn play(&mut self, index: usize) -> Result<MoveRecord, MoveError> {
        self.board.place(index, self.current)?;
        let mark = self.current;
        let event = if let Some(line) = self.board.winning_line(mark) {
            self.status = GameStatus::Won(mark);
            self.winning_line = Some(line);
            GameEvent::Won { winner: mark, line }
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            GameEvent::Drawn
        } else {
            self.current = mark.opponent();
            GameEvent::TurnPassed(self.current)
        };
        Ok(MoveRecord { index, mark, event })
    }
}
