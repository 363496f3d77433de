#![cfg(feature = "std")]

//! Client side of a session: forwards [`GameApi`] calls over a transport.

use crate::{
    board::GameState,
    common::MoveOutcome,
    difficulty::Difficulty,
    game::OpponentMove,
    protocol::{GameApi, Message, PROTOCOL_VERSION},
    transport::Transport,
};
use anyhow::anyhow;

pub struct Stub<T: Transport> {
    transport: T,
    handshaken: bool,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            handshaken: false,
        }
    }

    async fn ensure_handshake(&mut self) -> anyhow::Result<()> {
        if self.handshaken {
            return Ok(());
        }
        self.transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::HandshakeAck { version } if version == PROTOCOL_VERSION => {
                self.handshaken = true;
                Ok(())
            }
            Message::HandshakeAck { version } => Err(anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            Message::Error { reason } => Err(anyhow!("Handshake refused: {}", reason)),
            other => Err(anyhow!("Expected HandshakeAck, got {:?}", other)),
        }
    }

    /// Send one request and wait for its reply.
    async fn request(&mut self, msg: Message) -> anyhow::Result<Message> {
        self.ensure_handshake().await?;
        self.transport.send(msg).await?;
        match self.transport.recv().await? {
            Message::Error { reason } => Err(anyhow!("Request failed: {}", reason)),
            reply => Ok(reply),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn state(&mut self) -> anyhow::Result<GameState> {
        match self.request(Message::StateReq).await? {
            Message::StateResp(state) => Ok(state),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn submit_move(&mut self, index: i64) -> anyhow::Result<MoveOutcome> {
        match self.request(Message::Move { index }).await? {
            Message::MoveResp(outcome) => Ok(outcome),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn reset(&mut self) -> anyhow::Result<String> {
        match self.request(Message::Reset).await? {
            Message::ResetAck { message } => Ok(message),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn set_difficulty(&mut self, label: &str) -> anyhow::Result<Difficulty> {
        let msg = Message::SetDifficulty {
            label: label.to_string(),
        };
        match self.request(msg).await? {
            Message::DifficultyAck(level) => Ok(level),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }

    async fn opponent_move(&mut self) -> anyhow::Result<OpponentMove> {
        match self.request(Message::OpponentMoveReq).await? {
            Message::OpponentMoveResp(reply) => Ok(reply),
            other => Err(anyhow!("Unexpected message: {:?}", other)),
        }
    }
}
