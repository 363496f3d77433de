use rand::rngs::SmallRng;

use crate::{ai, board::GameState, difficulty::Difficulty, player::Player};

/// Computer player backed by the opponent engine.
///
/// Easy picks any empty cell and so suits either seat. Medium and Hard always
/// evaluate the grid from the Opponent's point of view.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, state: &GameState) -> Option<usize> {
        ai::select_move(state, self.difficulty, rng)
    }
}
