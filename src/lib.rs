#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
mod difficulty;
mod game;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod player_node;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod skeleton;
#[cfg(feature = "std")]
pub mod stub;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use difficulty::*;
pub use game::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use player_node::*;
#[cfg(feature = "std")]
pub use protocol::{GameApi, Message, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use skeleton::*;
#[cfg(feature = "std")]
pub use stub::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
