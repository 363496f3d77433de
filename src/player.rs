use rand::rngs::SmallRng;

use crate::{board::GameState, common::MoveOutcome};

/// Interface implemented by anything that can take a seat at the board.
pub trait Player: Send {
    /// Choose a cell for the side to move in `state`. `None` gives up the game.
    fn select_move(&mut self, rng: &mut SmallRng, state: &GameState) -> Option<usize>;

    /// Inform the player of the result of its own move.
    fn handle_outcome(&mut self, _index: usize, _outcome: &MoveOutcome) {}

    /// Inform the player of a move made by the other side.
    fn handle_opponent_move(&mut self, _index: usize, _outcome: &MoveOutcome) {}
}
