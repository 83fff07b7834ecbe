//! Pokedex Store
//!
//! In-process store of caught pokemon. Unlike the response cache this has
//! no TTL; a caught pokemon stays caught for the life of the process.

use std::collections::HashMap;

use crate::models::Pokemon;

// == Pokedex ==
/// Caught pokemon, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, Pokemon>,
}

impl Pokedex {
    /// Creates an empty pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught pokemon. Catching the same pokemon again simply
    /// refreshes its entry.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    /// Looks up a caught pokemon by name.
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of all caught pokemon, sorted for stable output.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of caught pokemon.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
