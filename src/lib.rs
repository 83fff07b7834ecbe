//! Pokedex CLI - a PokeAPI browser with a timed response cache
//!
//! Responses fetched from PokeAPI are cached by request URL and reaped by
//! a background task once they outlive the configured TTL.

pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokeapi;
pub mod pokedex;
pub mod tasks;

pub use cache::TimedCache;
pub use commands::{App, Command};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::ReaperHandle;
