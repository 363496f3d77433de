//! Board state machine: nine cells, the side to move and the terminal flag.

use crate::common::{BoardError, Cell, MoveOutcome, RejectReason, Side};
use crate::config::{NUM_CELLS, WIN_LINES};

/// Flat row-major grid of cells.
pub type Cells = [Cell; NUM_CELLS];

/// Returns `true` when `side` holds one of the eight lines on `cells`.
///
/// Works on any grid, committed or not, so the opponent engine can probe
/// hypothetical positions.
pub fn has_won(cells: &Cells, side: Side) -> bool {
    let target = Cell::from(side);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Side holding a complete line, if any. Player lines are reported first.
pub fn winner(cells: &Cells) -> Option<Side> {
    [Side::Player, Side::Opponent]
        .into_iter()
        .find(|&side| has_won(cells, side))
}

/// Returns `true` when no empty cell is left.
pub fn is_full(cells: &Cells) -> bool {
    cells.iter().all(|c| !c.is_empty())
}

/// Indices of empty cells in scan order `0..9`.
pub fn empty_cells(cells: &Cells) -> impl Iterator<Item = usize> + '_ {
    cells
        .iter()
        .enumerate()
        .filter_map(|(i, c)| c.is_empty().then_some(i))
}

/// Read-only snapshot of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub cells: Cells,
    pub turn: Side,
    pub terminal: bool,
}

impl GameState {
    /// Snapshot of a fresh game: empty grid, Player to move.
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
            turn: Side::Player,
            terminal: false,
        }
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        empty_cells(&self.cells)
    }

    pub fn winner(&self) -> Option<Side> {
        winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        is_full(&self.cells)
    }

    /// Number of `(Player, Opponent)` marks on the grid.
    pub fn mark_counts(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(p, o), cell| match cell {
                Cell::Player => (p + 1, o),
                Cell::Opponent => (p, o + 1),
                Cell::Empty => (p, o),
            })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable game board. Only [`Board::apply_move`] and [`Board::reset`] change it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
    turn: Side,
    terminal: bool,
}

impl Board {
    /// Create an empty board with the Player to move.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
            turn: Side::Player,
            terminal: false,
        }
    }

    /// Snapshot of the current state. Has no side effects.
    pub fn state(&self) -> GameState {
        GameState::from(self)
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Side whose mark the next accepted move writes.
    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Clear every cell and hand the first move back to the Player.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_CELLS];
        self.turn = Side::Player;
        self.terminal = false;
    }

    /// Attempt to mark `index` for the side to move.
    ///
    /// Checks run in order: game still open, index on the board, cell empty.
    /// A rejected move leaves the board untouched.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.terminal {
            return MoveOutcome::Rejected(RejectReason::GameOver);
        }
        if index >= NUM_CELLS {
            return MoveOutcome::Rejected(RejectReason::OutOfRange);
        }
        if !self.cells[index].is_empty() {
            return MoveOutcome::Rejected(RejectReason::Occupied);
        }

        let side = self.turn;
        self.cells[index] = Cell::from(side);

        if has_won(&self.cells, side) {
            self.terminal = true;
            MoveOutcome::Win(side)
        } else if is_full(&self.cells) {
            self.terminal = true;
            MoveOutcome::Draw
        } else {
            self.turn = side.other();
            MoveOutcome::Continue { next: self.turn }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Board> for GameState {
    fn from(b: &Board) -> Self {
        GameState {
            cells: b.cells,
            turn: b.turn,
            terminal: b.terminal,
        }
    }
}

impl TryFrom<GameState> for Board {
    type Error = BoardError;

    /// Rebuild a board from a snapshot, rejecting grids that no legal game
    /// could have produced.
    fn try_from(state: GameState) -> Result<Self, Self::Error> {
        let (player, opponent) = state.mark_counts();
        if player < opponent || player - opponent > 1 {
            return Err(BoardError::MarkImbalance { player, opponent });
        }

        let player_won = has_won(&state.cells, Side::Player);
        let opponent_won = has_won(&state.cells, Side::Opponent);
        if player_won && opponent_won {
            return Err(BoardError::BothSidesWon);
        }

        // Side that wrote the most recent mark.
        let last = if player > opponent {
            Side::Player
        } else {
            Side::Opponent
        };
        if (player_won && last != Side::Player) || (opponent_won && last != Side::Opponent) {
            return Err(BoardError::MoveAfterWin);
        }

        let terminal = player_won || opponent_won || state.is_full();
        if state.terminal != terminal {
            return Err(BoardError::TerminalMismatch { expected: terminal });
        }

        let expected = if terminal { last } else { last.other() };
        if state.turn != expected {
            return Err(BoardError::TurnMismatch { expected });
        }

        Ok(Board {
            cells: state.cells,
            turn: state.turn,
            terminal: state.terminal,
        })
    }
}
