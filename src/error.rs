//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror. The cache itself has
//! no error type: its operations are total, and a miss is an ordinary
//! `None`, not a failure.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the command and fetch layers.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP request failed or returned a non-success status
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// `mapb` issued before any forward page was fetched
    #[error("cannot go back; already at the beginning of the location list")]
    AtListStart,

    /// `inspect` on a pokemon that is not in the pokedex
    #[error("{0} has not been caught yet")]
    NotCaught(String),

    /// Input line did not match any known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command given without its required argument
    #[error("the {0} command requires an argument")]
    MissingArgument(&'static str),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;
