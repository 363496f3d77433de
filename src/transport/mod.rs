#![cfg(feature = "std")]

//! Message transports between a session host and its client.

use crate::protocol::Message;

#[async_trait::async_trait]
pub trait Transport: Send {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;

    /// Wait for the peer's next request for as long as it takes. Timeouts
    /// apply only once a frame has started to arrive.
    async fn recv_idle(&mut self) -> anyhow::Result<Message> {
        self.recv().await
    }
}

pub mod in_memory;
pub mod tcp;
