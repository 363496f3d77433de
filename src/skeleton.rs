#![cfg(feature = "std")]

//! Server side of a session: answers protocol requests against a [`GameApi`].

use crate::{
    protocol::{difficulty_message, GameApi, Message, PROTOCOL_VERSION},
    transport::Transport,
};
use anyhow::anyhow;

pub struct Skeleton<E: GameApi, T: Transport> {
    engine: E,
    transport: T,
}

impl<E: GameApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: E, transport: T) -> Self {
        Self { engine, transport }
    }

    /// Hand back the served engine once the peer is gone.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Accept the handshake, then serve one request at a time until the
    /// peer disconnects.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
            }
            Message::Handshake { version } => {
                log::warn!(
                    "handshake version mismatch: expected {}, peer sent {}",
                    PROTOCOL_VERSION,
                    version
                );
                self.transport
                    .send(Message::Error {
                        reason: format!("unsupported protocol version {}", version),
                    })
                    .await?;
                return Err(anyhow!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ));
            }
            other => return Err(anyhow!("Expected Handshake, got {:?}", other)),
        }
        log::info!("session opened");

        // an idle client is thinking, not gone
        while let Ok(msg) = self.transport.recv_idle().await {
            let reply = self.handle(msg).await?;
            self.transport.send(reply).await?;
        }
        log::info!("session closed");
        Ok(())
    }

    async fn handle(&mut self, msg: Message) -> anyhow::Result<Message> {
        let reply = match msg {
            Message::StateReq => Message::StateResp(self.engine.state().await?),
            Message::Move { index } => Message::MoveResp(self.engine.submit_move(index).await?),
            Message::Reset => Message::ResetAck {
                message: self.engine.reset().await?,
            },
            Message::SetDifficulty { label } => {
                let level = self.engine.set_difficulty(&label).await?;
                log::info!("{}", difficulty_message(&label));
                Message::DifficultyAck(level)
            }
            Message::OpponentMoveReq => {
                Message::OpponentMoveResp(self.engine.opponent_move().await?)
            }
            other => {
                log::warn!("unexpected request: {:?}", other);
                Message::Error {
                    reason: String::from("unexpected request"),
                }
            }
        };
        Ok(reply)
    }
}
