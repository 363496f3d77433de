#![cfg(feature = "std")]

//! Request/response messages for driving a game session across a transport.

use serde::{Deserialize, Serialize};

use crate::{
    board::GameState, common::MoveOutcome, difficulty::Difficulty, game::OpponentMove,
};

/// Version exchanged during the handshake; peers must match exactly.
pub const PROTOCOL_VERSION: u16 = 1;

/// Acknowledgement text sent after a reset.
pub const RESET_MESSAGE: &str = "Game reset. New game started.";

/// Messages exchanged between a session host and a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Opens a session.
    Handshake { version: u16 },
    /// Accepts a session.
    HandshakeAck { version: u16 },
    /// Request the current board snapshot.
    StateReq,
    StateResp(GameState),
    /// Submit a raw cell index for the side to move.
    Move { index: i64 },
    MoveResp(MoveOutcome),
    /// Clear the board.
    Reset,
    ResetAck { message: String },
    /// Change the opponent's strength from a free-text label.
    SetDifficulty { label: String },
    DifficultyAck(Difficulty),
    /// Ask the engine to play for the Opponent.
    OpponentMoveReq,
    OpponentMoveResp(OpponentMove),
    /// Request could not be served.
    Error { reason: String },
}

/// Operations a client can perform on a game session, local or remote.
#[async_trait::async_trait]
pub trait GameApi: Send {
    async fn state(&mut self) -> anyhow::Result<GameState>;
    async fn submit_move(&mut self, index: i64) -> anyhow::Result<MoveOutcome>;
    /// Returns the acknowledgement text.
    async fn reset(&mut self) -> anyhow::Result<String>;
    /// Returns the level the label was mapped to.
    async fn set_difficulty(&mut self, label: &str) -> anyhow::Result<Difficulty>;
    async fn opponent_move(&mut self) -> anyhow::Result<OpponentMove>;
}

/// Acknowledgement for a difficulty change. Echoes the label as given.
pub fn difficulty_message(label: &str) -> String {
    format!("Difficulty set to {}", label)
}
