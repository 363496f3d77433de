//! Common types for tic-tac-toe: sides, cells, move outcomes and board errors.

use core::fmt;

/// One of the two participants. The Player always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Human side, marks with `X`.
    Player,
    /// Computer side, marks with `O`.
    Opponent,
}

impl Side {
    /// The side that moves after this one.
    pub const fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Character written into a cell by this side.
    pub const fn mark(self) -> char {
        match self {
            Side::Player => 'X',
            Side::Opponent => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Player,
    Opponent,
}

impl Cell {
    /// Owner of the mark in this cell, `None` when empty.
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Player => Some(Side::Player),
            Cell::Opponent => Some(Side::Opponent),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used when printing the board.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Player => Cell::Player,
            Side::Opponent => Cell::Opponent,
        }
    }
}

/// Why a move attempt was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The game already ended in a win or draw.
    GameOver,
    /// Index outside `0..=8`.
    OutOfRange,
    /// Target cell already holds a mark.
    Occupied,
}

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    /// Board left untouched.
    Rejected(RejectReason),
    /// Move applied, play passes to `next`.
    Continue { next: Side },
    /// Move completed a line for the given side.
    Win(Side),
    /// Move filled the last cell without completing a line.
    Draw,
}

impl MoveOutcome {
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }

    /// Whether this outcome ended the game.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Draw)
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::Rejected(_) => write!(f, "Invalid move"),
            MoveOutcome::Continue { next } => {
                write!(f, "Move successful. It is {}'s turn.", next.mark())
            }
            MoveOutcome::Win(side) => write!(f, "{} wins!", side.mark()),
            MoveOutcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Errors returned when a snapshot cannot be turned back into a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Player marks minus Opponent marks is not 0 or 1.
    MarkImbalance { player: usize, opponent: usize },
    /// Both sides hold a complete line.
    BothSidesWon,
    /// A mark was placed after a line was already completed.
    MoveAfterWin,
    /// Terminal flag disagrees with the cells.
    TerminalMismatch { expected: bool },
    /// Side to move disagrees with the mark counts.
    TurnMismatch { expected: Side },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MarkImbalance { player, opponent } => write!(
                f,
                "Mark counts out of balance: {} X against {} O",
                player, opponent
            ),
            BoardError::BothSidesWon => write!(f, "Both sides hold a winning line"),
            BoardError::MoveAfterWin => write!(f, "A move was made after the game was won"),
            BoardError::TerminalMismatch { expected } => {
                write!(f, "Terminal flag should be {}", expected)
            }
            BoardError::TurnMismatch { expected } => {
                write!(f, "Turn should belong to {}", expected)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
