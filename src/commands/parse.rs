//! Command Parsing
//!
//! Turns a raw input line into a [`Command`]. Matching is
//! case-insensitive; arguments keep their original case since PokeAPI
//! resource names are lowercase anyway.

use crate::error::{PokedexError, Result};

/// Help text listing every command, printed by `help`.
pub const HELP_TEXT: &str = "\
Welcome to the CLI Pokedex!
Usage:

help    : Displays a help message
exit    : Exit the Pokedex
map     : Displays the names of the next 20 location areas
mapb    : Displays the names of the previous 20 location areas
explore : Displays the names of the pokemon in a specific area
catch   : Attempts to catch a specific pokemon
inspect : Attempts to inspect a caught pokemon
pokedex : Lists all captured pokemon in your pokedex";

// == Command ==
/// One parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print usage
    Help,
    /// Leave the REPL
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    /// List pokemon encountered in an area
    Explore(String),
    /// Attempt to catch a pokemon
    Catch(String),
    /// Show a caught pokemon's details
    Inspect(String),
    /// List caught pokemon
    Pokedex,
}

impl Command {
    /// Parses one input line.
    ///
    /// The command word is the first whitespace-separated token; at most
    /// one argument is consumed, the rest of the line is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let word = parts.next().unwrap_or("").to_lowercase();
        let argument = parts.next();

        match word.as_str() {
            "help" => Ok(Self::Help),
            "exit" => Ok(Self::Exit),
            "map" => Ok(Self::Map),
            "mapb" => Ok(Self::MapBack),
            "explore" => Self::require_argument("explore", argument).map(Self::Explore),
            "catch" => Self::require_argument("catch", argument).map(Self::Catch),
            "inspect" => Self::require_argument("inspect", argument).map(Self::Inspect),
            "pokedex" => Ok(Self::Pokedex),
            _ => Err(PokedexError::UnknownCommand(word)),
        }
    }

    fn require_argument(command: &'static str, argument: Option<&str>) -> Result<String> {
        argument
            .map(str::to_string)
            .ok_or(PokedexError::MissingArgument(command))
    }
}
