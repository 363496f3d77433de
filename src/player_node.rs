#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    board::GameState,
    common::{MoveOutcome, Side},
    player::Player,
    protocol::GameApi,
};

/// Drives a full game through a [`GameApi`].
///
/// `player` always takes the Player seat. The Opponent seat is either the
/// session's own engine or, in hotseat mode, a second [`Player`].
pub struct PlayerNode<A: GameApi> {
    api: A,
    player: Box<dyn Player>,
    rival: Option<Box<dyn Player>>,
    moves: usize,
}

impl<A: GameApi> PlayerNode<A> {
    /// Player against the session's engine.
    pub fn new(api: A, player: Box<dyn Player>) -> Self {
        Self {
            api,
            player,
            rival: None,
            moves: 0,
        }
    }

    /// Two players sharing one board.
    pub fn hotseat(api: A, player: Box<dyn Player>, rival: Box<dyn Player>) -> Self {
        Self {
            api,
            player,
            rival: Some(rival),
            moves: 0,
        }
    }

    /// Play until the game ends or a seat gives up. Returns the final state.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<GameState> {
        loop {
            let state = self.api.state().await?;
            if state.terminal {
                return Ok(state);
            }
            let played = match (state.turn, self.rival.as_mut()) {
                (Side::Player, _) => Self::seat_turn(&mut self.api, &mut self.player, rng, &state).await?,
                (Side::Opponent, Some(rival)) => Self::seat_turn(&mut self.api, rival, rng, &state).await?,
                (Side::Opponent, None) => {
                    let reply = self.api.opponent_move().await?;
                    match (reply.index, reply.outcome) {
                        (Some(index), Some(outcome)) => {
                            self.player.handle_opponent_move(index, &outcome);
                            Some(outcome)
                        }
                        _ => {
                            return Err(anyhow::anyhow!(
                                "Engine returned no move for an open game"
                            ))
                        }
                    }
                }
            };
            match played {
                Some(outcome) if outcome.is_accepted() => self.moves += 1,
                Some(_) => {}
                None => {
                    log::info!("{} gave up", state.turn);
                    return Ok(state);
                }
            }
        }
    }

    async fn seat_turn(
        api: &mut A,
        seat: &mut Box<dyn Player>,
        rng: &mut SmallRng,
        state: &GameState,
    ) -> anyhow::Result<Option<MoveOutcome>> {
        let Some(index) = seat.select_move(rng, state) else {
            return Ok(None);
        };
        let outcome = api.submit_move(index as i64).await?;
        seat.handle_outcome(index, &outcome);
        Ok(Some(outcome))
    }

    /// Accepted moves made through this node, both seats included.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn into_api(self) -> A {
        self.api
    }
}
