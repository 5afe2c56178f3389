use super::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use super::{win, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play continues; the toggled player is now active.
    Continue { next_player: Player },
    /// The move completed four-in-a-row.
    Win { winner: Player },
    /// The move filled the last open cell without a win.
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// The game state machine: board, active player, and terminal outcome.
///
/// States are InProgress, Won, and Tied; the only transition is
/// [`apply_move`](GameState::apply_move), and once an outcome is set further
/// moves are rejected with [`MoveError::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state with the given board dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: Player::One, // Player 1 starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Lowest empty row in a column, None when the column is full.
    pub fn find_drop_row(&self, column: usize) -> Option<usize> {
        self.board.find_drop_row(column)
    }

    /// Apply the active player's move to a column.
    ///
    /// Exactly one cell changes on success. The active player toggles only
    /// on [`MoveOutcome::Continue`]; after a win or tie it stays on the
    /// player who moved last. Rejected moves leave the state untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player.to_cell())?;

        if win::has_win(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
            return Ok(MoveOutcome::Win {
                winner: self.current_player,
            });
        }

        if self.board.is_full() {
            self.outcome = Some(GameOutcome::Tie);
            return Ok(MoveOutcome::Tie);
        }

        self.current_player = self.current_player.other();
        Ok(MoveOutcome::Continue {
            next_player: self.current_player,
        })
    }

    /// Start a fresh game on a board of the same dimensions. Nothing from
    /// the previous game carries over.
    pub fn reset(&mut self) {
        *self = GameState::new(self.board.rows(), self.board.cols());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
