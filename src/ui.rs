#![cfg(feature = "std")]

//! Text rendering of boards and status lines.

use std::fmt::Write;

use crate::{
    board::GameState,
    common::{Cell, Side},
    config::{to_coord, BOARD_SIZE},
    difficulty::Difficulty,
};

/// Display names for both seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    pub player: String,
    pub opponent: String,
}

impl Names {
    /// Names for two humans; blank entries fall back to "Player 1"/"Player 2".
    pub fn hotseat(player: &str, opponent: &str) -> Self {
        let pick = |name: &str, fallback: &str| {
            let name = name.trim();
            if name.is_empty() {
                fallback.to_string()
            } else {
                name.to_string()
            }
        };
        Self {
            player: pick(player, "Player 1"),
            opponent: pick(opponent, "Player 2"),
        }
    }

    /// Names for a game against the engine.
    pub fn versus_ai(difficulty: Difficulty) -> Self {
        Self {
            player: "You".to_string(),
            opponent: format!("AI ({})", difficulty),
        }
    }

    pub fn of(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Replace bare "X wins!"/"O wins!" with the winner's name.
    pub fn announce(&self, status: &str) -> String {
        status
            .replace("X wins!", &format!("{} (X) wins!", self.player))
            .replace("O wins!", &format!("{} (O) wins!", self.opponent))
    }

    /// "It's <name> (X)!" style line for the side to move.
    pub fn turn_line(&self, side: Side) -> String {
        format!("It's {} ({})!", self.of(side), side.mark())
    }
}

impl Default for Names {
    fn default() -> Self {
        Self::hotseat("", "")
    }
}

/// Render the grid. Empty cells show their index so players know what to type.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    for (idx, cell) in state.cells.iter().enumerate() {
        let (row, col) = to_coord(idx);
        if col == 0 && row > 0 {
            out.push_str("---+---+---\n");
        }
        if col > 0 {
            out.push('|');
        }
        let ch = match cell {
            Cell::Empty => char::from_digit(idx as u32, 10).unwrap_or('?'),
            cell => cell.symbol(),
        };
        let _ = write!(out, " {} ", ch);
        if col == BOARD_SIZE - 1 {
            out.push('\n');
        }
    }
    out
}

/// Print the board to stdout.
pub fn print_board(state: &GameState) {
    println!("\n{}", render_board(state));
}
