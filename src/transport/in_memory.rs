use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::Message;
use crate::transport::Transport;

/// Pair of connected in-process endpoints backed by shared queues.
pub struct InMemoryTransport {
    inbox: Arc<Mutex<VecDeque<Message>>>,
    outbox: Arc<Mutex<VecDeque<Message>>>,
}

impl InMemoryTransport {
    /// Two endpoints where each one's outbox is the other's inbox.
    pub fn pair() -> (Self, Self) {
        let a_to_b = Arc::new(Mutex::new(VecDeque::new()));
        let b_to_a = Arc::new(Mutex::new(VecDeque::new()));
        (
            Self {
                inbox: b_to_a.clone(),
                outbox: a_to_b.clone(),
            },
            Self {
                inbox: a_to_b,
                outbox: b_to_a,
            },
        )
    }

    fn peer_dropped(&self) -> bool {
        Arc::strong_count(&self.inbox) == 1
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        if Arc::strong_count(&self.outbox) == 1 {
            return Err(anyhow::anyhow!("Channel closed"));
        }
        let mut queue = self
            .outbox
            .lock()
            .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
        queue.push_back(msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            let next = {
                let mut queue = self
                    .inbox
                    .lock()
                    .map_err(|_| anyhow::anyhow!("Channel poisoned"))?;
                queue.pop_front()
            };
            if let Some(msg) = next {
                return Ok(msg);
            }
            if self.peer_dropped() {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}
