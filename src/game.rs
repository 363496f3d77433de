use core::fmt;

use rand::{rngs::SmallRng, SeedableRng};

use crate::{
    ai,
    board::{Board, GameState},
    common::{BoardError, MoveOutcome},
    difficulty::Difficulty,
};

/// What happened when the opponent was asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct OpponentMove {
    /// Cell the engine chose, `None` when it had nothing to play.
    pub index: Option<usize>,
    /// Result of submitting that cell, `None` when no move was made.
    pub outcome: Option<MoveOutcome>,
}

impl OpponentMove {
    /// Reply used when the engine has no legal move.
    pub const NONE: OpponentMove = OpponentMove {
        index: None,
        outcome: None,
    };
}

/// Renders the outcome text, or nothing when no move was made.
impl fmt::Display for OpponentMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Some(outcome) => write!(f, "{}", outcome),
            None => Ok(()),
        }
    }
}

/// One game session: a board, the opponent's difficulty and its RNG.
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Game {
    /// New session seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// New session with a fixed seed, for reproducible random play.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            difficulty: Difficulty::default(),
            rng,
        }
    }

    /// Resume a session from a snapshot, validating it first.
    pub fn from_state(
        state: GameState,
        difficulty: Difficulty,
        rng: SmallRng,
    ) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::try_from(state)?,
            difficulty,
            rng,
        })
    }

    /// Current board snapshot.
    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Start over. The difficulty is kept.
    pub fn reset(&mut self) {
        self.board.reset();
        log::debug!("board reset");
    }

    /// Apply a free-text difficulty label and return the level it mapped to.
    pub fn set_difficulty(&mut self, label: &str) -> Difficulty {
        self.difficulty = Difficulty::from_label(label);
        log::debug!("difficulty set to {} from {:?}", self.difficulty, label);
        self.difficulty
    }

    /// Submit a raw cell index for the side to move. Negative and oversized
    /// indices are rejected like any other invalid move.
    pub fn submit_move(&mut self, index: i64) -> MoveOutcome {
        let side = self.board.turn();
        let outcome = self
            .board
            .apply_move(usize::try_from(index).unwrap_or(usize::MAX));
        match outcome {
            MoveOutcome::Rejected(reason) => {
                log::debug!("rejected {} at {}: {:?}", side, index, reason)
            }
            MoveOutcome::Continue { .. } => log::debug!("{} played {}", side, index),
            MoveOutcome::Win(_) | MoveOutcome::Draw => {
                log::info!("{} played {}: {}", side, index, outcome)
            }
        }
        outcome
    }

    /// Let the engine choose a cell and play it through [`Game::submit_move`].
    pub fn opponent_move(&mut self) -> OpponentMove {
        let state = self.board.state();
        match ai::select_move(&state, self.difficulty, &mut self.rng) {
            Some(index) => OpponentMove {
                index: Some(index),
                outcome: Some(self.submit_move(index as i64)),
            },
            None => OpponentMove::NONE,
        }
    }
}

#[cfg(feature = "std")]
impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
#[async_trait::async_trait]
impl crate::protocol::GameApi for Game {
    async fn state(&mut self) -> anyhow::Result<GameState> {
        Ok(Game::state(self))
    }

    async fn submit_move(&mut self, index: i64) -> anyhow::Result<MoveOutcome> {
        Ok(Game::submit_move(self, index))
    }

    async fn reset(&mut self) -> anyhow::Result<String> {
        Game::reset(self);
        Ok(String::from(crate::protocol::RESET_MESSAGE))
    }

    async fn set_difficulty(&mut self, label: &str) -> anyhow::Result<Difficulty> {
        Ok(Game::set_difficulty(self, label))
    }

    async fn opponent_move(&mut self) -> anyhow::Result<OpponentMove> {
        Ok(Game::opponent_move(self))
    }
}
