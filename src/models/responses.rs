//! Response DTOs for the PokeAPI endpoints
//!
//! Only the fields the commands actually display are modeled; PokeAPI
//! returns far more, and serde skips the rest.

use serde::Deserialize;

/// A named resource reference, PokeAPI's ubiquitous `{name, url}` pair
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Resource URL
    pub url: String,
}

/// One page of the location-area listing (GET /location-area/?limit=20)
///
/// `next` and `previous` are the pagination cursors the `map`/`mapb`
/// commands walk; either may be absent at the ends of the list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Location areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail for one location area (GET /location-area/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    /// Area name
    pub name: String,
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One encounter slot within a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The encountered pokemon
    pub pokemon: NamedResource,
}

/// Species data (GET /pokemon-species/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSpecies {
    /// Species name
    pub name: String,
    /// Base capture rate, 0-255; drives the catch probability
    pub capture_rate: u32,
}

/// Full pokemon data (GET /pokemon/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stats in PokeAPI order (hp, attack, defense, ...)
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonTypeSlot>,
}

/// One base stat line
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// Base value of the stat
    pub base_stat: u32,
    /// The stat itself (hp, attack, ...)
    pub stat: NamedResource,
}

/// One type slot
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    /// Slot index, 1-based
    pub slot: u32,
    /// The type (grass, poison, ...)
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
