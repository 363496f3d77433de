use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// Default timeout for a single send or receive.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest accepted frame body. Every message is far below this.
const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Frames are a big-endian `u32` length followed by a bincode body.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Duration,
    max_message_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self::with_config(stream, DEFAULT_TIMEOUT, MAX_MESSAGE_SIZE)
    }

    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self::with_config(stream, timeout_duration, MAX_MESSAGE_SIZE)
    }

    pub fn with_config(stream: TcpStream, timeout_duration: Duration, max_message_size: u32) -> Self {
        Self {
            stream,
            timeout_duration,
            max_message_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr).await?;
        Ok(Self::new(stream))
    }

    /// Read one frame under the timeout. `first` is a length byte that was
    /// already taken off the stream.
    async fn read_frame(&mut self, first: Option<u8>) -> anyhow::Result<Message> {
        let limit = self.timeout_duration;
        let max = self.max_message_size;
        let stream = &mut self.stream;
        let recv_op = async move {
            let mut len_buf = [0u8; 4];
            let start = match first {
                Some(byte) => {
                    len_buf[0] = byte;
                    1
                }
                None => 0,
            };
            stream
                .read_exact(&mut len_buf[start..])
                .await
                .map_err(io_error)?;
            let len = u32::from_be_bytes(len_buf);
            if len == 0 {
                return Err(anyhow::anyhow!("Invalid message length: 0"));
            }
            if len > max {
                return Err(anyhow::anyhow!(
                    "Message too large: {} bytes (max: {})",
                    len,
                    max
                ));
            }

            let mut buf = vec![0u8; len as usize];
            stream.read_exact(&mut buf).await.map_err(io_error)?;
            let msg = bincode::deserialize::<Message>(&buf)
                .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
            anyhow::Ok(msg)
        };
        timeout(limit, recv_op)
            .await
            .map_err(|_| anyhow::anyhow!("Receive timeout after {:?}", limit))?
    }
}

fn io_error(e: std::io::Error) -> anyhow::Error {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe => {
            anyhow::anyhow!("Connection closed by peer")
        }
        ErrorKind::ConnectionReset => anyhow::anyhow!("Connection reset by peer"),
        _ => anyhow::anyhow!("I/O error: {}", e),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = bincode::serialize(&msg)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
        if data.len() > self.max_message_size as usize {
            return Err(anyhow::anyhow!(
                "Message too large: {} bytes (max: {})",
                data.len(),
                self.max_message_size
            ));
        }

        let limit = self.timeout_duration;
        let send_op = async {
            let len = (data.len() as u32).to_be_bytes();
            self.stream.write_all(&len).await.map_err(io_error)?;
            self.stream.write_all(&data).await.map_err(io_error)?;
            anyhow::Ok(())
        };
        timeout(limit, send_op)
            .await
            .map_err(|_| anyhow::anyhow!("Send timeout after {:?}", limit))?
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        self.read_frame(None).await
    }

    async fn recv_idle(&mut self) -> anyhow::Result<Message> {
        let mut first = [0u8; 1];
        self.stream.read_exact(&mut first).await.map_err(io_error)?;
        self.read_frame(Some(first[0])).await
    }
}
