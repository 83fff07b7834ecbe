//! Response models for the PokeAPI client
//!
//! The cache stores raw response bytes; these types are what those bytes
//! decode into on the way out.

mod responses;

pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, Pokemon, PokemonEncounter, PokemonSpecies,
    PokemonStat, PokemonTypeSlot,
};
