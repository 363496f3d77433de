#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::{
    board::GameState,
    common::MoveOutcome,
    config::{to_index, NUM_CELLS},
    player::Player,
    ui::{print_board, Names},
};

/// Parse a cell from user input: a flat index `0-8` or a coordinate such as
/// `B2` (column letter, 1-based row).
pub fn parse_move(input: &str) -> Option<usize> {
    let input = input.trim();
    if let Ok(idx) = input.parse::<usize>() {
        return Some(idx);
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    to_index(row - 1, col)
}

/// Interactive player reading moves from stdin.
pub struct CliPlayer {
    names: Names,
}

impl CliPlayer {
    pub fn new(names: Names) -> Self {
        Self { names }
    }
}

impl Player for CliPlayer {
    fn select_move(&mut self, _rng: &mut SmallRng, state: &GameState) -> Option<usize> {
        print_board(state);
        let stdin = io::stdin();
        loop {
            print!(
                "{} Enter a cell (0-{} or A1-C3): ",
                self.names.turn_line(state.turn),
                NUM_CELLS - 1
            );
            let _ = io::stdout().flush();
            let mut line = String::new();
            match stdin.lock().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match parse_move(&line) {
                Some(idx) => return Some(idx),
                None => println!("Invalid input"),
            }
        }
    }

    fn handle_outcome(&mut self, _index: usize, outcome: &MoveOutcome) {
        println!("{}", self.names.announce(&outcome.to_string()));
    }

    fn handle_opponent_move(&mut self, index: usize, outcome: &MoveOutcome) {
        println!(
            "{} played {} -> {}",
            self.names.opponent,
            index,
            self.names.announce(&outcome.to_string())
        );
    }
}
