//! PokeAPI HTTP client
//!
//! Fetches PokeAPI resources through the timed response cache: every
//! request is keyed by its full URL, served from the cache when the raw
//! body is still present, and fetched over HTTP otherwise. Decoding
//! happens on this side of the cache, so the cache only ever sees opaque
//! bytes.

use reqwest::Client;
use tracing::debug;

use crate::cache::TimedCache;
use crate::error::Result;
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon, PokemonSpecies};

/// Page size for the location-area listing
const LOCATION_PAGE_LIMIT: u32 = 20;

// == PokeAPI Client ==
/// Client for PokeAPI with response caching.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// Underlying HTTP client
    http: Client,
    /// Base URL, e.g. `https://pokeapi.co/api/v2`
    base_url: String,
    /// Response cache shared with the reaper
    cache: TimedCache,
}

impl PokeApiClient {
    /// Creates a client for the given API base URL, backed by `cache`.
    pub fn new(base_url: impl Into<String>, cache: TimedCache) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            cache,
        }
    }

    /// URL of the first location-area page.
    pub fn first_location_page_url(&self) -> String {
        format!(
            "{}/location-area/?limit={}",
            self.base_url, LOCATION_PAGE_LIMIT
        )
    }

    // == Fetch ==
    /// Returns the raw body for `url`, from the cache if possible.
    ///
    /// On a miss the body is fetched over HTTP, a non-2xx status is an
    /// error, and the successful body is cached before being returned.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(bytes);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?.to_vec();

        self.cache.add(url, bytes.clone()).await;
        Ok(bytes)
    }

    // == Location Areas ==
    /// Fetches one page of location areas.
    ///
    /// `page_url` is a `next`/`previous` cursor from an earlier page;
    /// `None` fetches the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.first_location_page_url(),
        };

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Location Area Detail ==
    /// Fetches the encounter list for one location area.
    pub async fn location_area(&self, area: &str) -> Result<LocationAreaDetail> {
        let url = format!("{}/location-area/{}", self.base_url, area);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Species ==
    /// Fetches species data (capture rate) for one pokemon.
    pub async fn species(&self, pokemon: &str) -> Result<PokemonSpecies> {
        let url = format!("{}/pokemon-species/{}", self.base_url, pokemon);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // == Pokemon ==
    /// Fetches full pokemon data for the pokedex.
    pub async fn pokemon(&self, pokemon: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, pokemon);

        let bytes = self.fetch_bytes(&url).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
