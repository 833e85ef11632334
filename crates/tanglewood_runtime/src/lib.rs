//! Config ingestion, TCP server, and interactive console for Tanglewood.
//!
//! This crate provides:
//! - [`load_game`] and friends - TOML ingestion of world and action files
//! - [`GameServer`] - A blocking TCP line server over one shared game
//! - [`Console`] - A rustyline loop for local play

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod console;
mod server;

pub use config::{load_actions, load_game, load_world, parse_actions, parse_world};
pub use console::Console;
pub use server::GameServer;
