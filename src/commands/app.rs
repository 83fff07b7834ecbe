//! Application Object
//!
//! Owns everything the commands touch: the PokeAPI client (and through it
//! the response cache), the pokedex of caught pokemon, and the map paging
//! cursors. All state is threaded through this object explicitly; there
//! are no process-wide globals.

use std::fmt::Write as _;

use rand::Rng;
use tracing::debug;

use crate::commands::{Command, HELP_TEXT};
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;
use crate::pokeapi::PokeApiClient;
use crate::pokedex::Pokedex;

// == App ==
/// Application state for one REPL session.
pub struct App {
    /// PokeAPI client, backed by the timed response cache
    client: PokeApiClient,
    /// Caught pokemon
    pokedex: Pokedex,
    /// Cursor for the next location-area page
    map_next: Option<String>,
    /// Cursor for the previous location-area page
    map_previous: Option<String>,
}

impl App {
    /// Creates a fresh session around the given client.
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            map_next: None,
            map_previous: None,
        }
    }

    // == Execute ==
    /// Runs one command and returns its printable output.
    pub async fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Exit => Ok("Goodbye!".to_string()),
            Command::Map => self.map_forward().await,
            Command::MapBack => self.map_backward().await,
            Command::Explore(area) => self.explore(&area).await,
            Command::Catch(pokemon) => self.catch(&pokemon).await,
            Command::Inspect(pokemon) => self.inspect(&pokemon),
            Command::Pokedex => Ok(self.list_pokedex()),
        }
    }

    // == Map ==
    /// Shows the next page of location areas.
    ///
    /// Before the first `map` there is no cursor, so the first page is
    /// fetched; once the end of the list is reached the cursor resets and
    /// paging wraps to the start, as the original listing does.
    async fn map_forward(&mut self) -> Result<String> {
        let page = self.client.location_areas(self.map_next.as_deref()).await?;

        self.map_next = page.next.clone();
        self.map_previous = page.previous.clone();

        Ok(join_names(page.results.iter().map(|area| area.name.as_str())))
    }

    /// Shows the previous page of location areas.
    async fn map_backward(&mut self) -> Result<String> {
        let Some(previous) = self.map_previous.clone() else {
            return Err(PokedexError::AtListStart);
        };

        let page = self.client.location_areas(Some(&previous)).await?;

        self.map_next = page.next.clone();
        self.map_previous = page.previous.clone();

        Ok(join_names(page.results.iter().map(|area| area.name.as_str())))
    }

    // == Explore ==
    /// Lists the pokemon that can be encountered in `area`.
    async fn explore(&self, area: &str) -> Result<String> {
        let detail = self.client.location_area(area).await?;

        Ok(join_names(
            detail
                .pokemon_encounters
                .iter()
                .map(|encounter| encounter.pokemon.name.as_str()),
        ))
    }

    // == Catch ==
    /// Attempts to catch `pokemon`.
    ///
    /// The species' capture rate drives four shake rolls; only if all
    /// four pass is the pokemon caught, fetched in full, and recorded in
    /// the pokedex.
    async fn catch(&mut self, pokemon: &str) -> Result<String> {
        let species = self.client.species(pokemon).await?;
        debug!(
            pokemon,
            capture_rate = species.capture_rate,
            "attempting catch"
        );

        if !catch_succeeds(species.capture_rate, &mut rand::thread_rng()) {
            return Ok(format!("{pokemon} has escaped!"));
        }

        let caught = self.client.pokemon(pokemon).await?;
        self.pokedex.record(caught);

        Ok(format!("{pokemon} has been captured!"))
    }

    // == Inspect ==
    /// Prints the details of a caught pokemon.
    fn inspect(&self, pokemon: &str) -> Result<String> {
        let Some(caught) = self.pokedex.get(pokemon) else {
            return Err(PokedexError::NotCaught(pokemon.to_string()));
        };

        Ok(format_pokemon(caught))
    }

    // == Pokedex ==
    /// Lists every caught pokemon.
    fn list_pokedex(&self) -> String {
        let mut output = String::from("Your Pokemon:");
        for name in self.pokedex.names() {
            let _ = write!(output, "\n\t-{name}");
        }
        output
    }
}

// == Catch Probability ==
/// Rolls the four catch shakes for a given capture rate.
///
/// Shake probability follows the classic capture formula: the capture
/// rate is boosted by 1.5, then
/// `p = 1048560 / sqrt(sqrt(16711680 / boosted))`, and each of the four
/// shakes draws uniformly from `[0, 65535)`. The catch succeeds only if
/// every draw is at or below `p`. A capture rate of 255 pushes `p` past
/// the draw range, making the catch certain.
fn catch_succeeds<R: Rng>(capture_rate: u32, rng: &mut R) -> bool {
    let boosted = f64::from(capture_rate) * 1.5;
    let shake_probability = 1_048_560.0 / (16_711_680.0 / boosted).sqrt().sqrt();

    (0..4).all(|_| rng.gen::<f64>() * 65_535.0 <= shake_probability)
}

// == Output Formatting ==
/// Joins resource names one per line.
fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join("\n")
}

/// Formats a caught pokemon the way `inspect` displays it.
fn format_pokemon(pokemon: &Pokemon) -> String {
    let mut output = format!(
        "Name: {}\nHeight: {}\nWeight: {}\nStats:",
        pokemon.name, pokemon.height, pokemon.weight
    );

    for stat in &pokemon.stats {
        let _ = write!(output, "\n\t-{}: {}", stat.stat.name, stat.base_stat);
    }

    output.push_str("\nTypes:");
    for slot in &pokemon.types {
        let _ = write!(output, "\n\t-{}", slot.type_.name);
    }

    output
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TimedCache;
    use crate::tasks::ReaperHandle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    /// Base URL that cannot resolve; every fetch must come from the cache.
    const BASE: &str = "http://pokeapi.invalid/api/v2";

    fn offline_app() -> (App, TimedCache, ReaperHandle) {
        let (cache, reaper) = TimedCache::new(Duration::from_secs(60), Duration::from_secs(1));
        let client = PokeApiClient::new(BASE, cache.clone());
        (App::new(client), cache, reaper)
    }

    #[test]
    fn test_catch_always_succeeds_at_max_capture_rate() {
        // Boosted rate 382.5 puts the shake probability above the draw
        // range, so any rng catches.
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(catch_succeeds(255, &mut rng));
        }
    }

    #[test]
    fn test_catch_never_succeeds_at_zero_capture_rate() {
        // Zero rate collapses the shake probability to zero.
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(!catch_succeeds(0, &mut rng));
        }
    }

    #[tokio::test]
    async fn test_map_pages_forward_and_back() {
        let (mut app, cache, reaper) = offline_app();

        let first = format!("{BASE}/location-area/?limit=20");
        let second = format!("{BASE}/location-area/?offset=20&limit=20");
        cache
            .add(
                first.clone(),
                format!(
                    r#"{{"count": 3, "next": "{second}", "previous": null,
                        "results": [{{"name": "area-one", "url": ""}}]}}"#
                )
                .into_bytes(),
            )
            .await;
        cache
            .add(
                second.clone(),
                format!(
                    r#"{{"count": 3, "next": null, "previous": "{first}",
                        "results": [{{"name": "area-two", "url": ""}}]}}"#
                )
                .into_bytes(),
            )
            .await;

        assert_eq!(app.execute(Command::Map).await.unwrap(), "area-one");
        assert_eq!(app.execute(Command::Map).await.unwrap(), "area-two");
        assert_eq!(app.execute(Command::MapBack).await.unwrap(), "area-one");

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_map_back_at_list_start_is_an_error() {
        let (mut app, _cache, reaper) = offline_app();

        assert!(matches!(
            app.execute(Command::MapBack).await,
            Err(PokedexError::AtListStart)
        ));

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_explore_lists_encounters() {
        let (mut app, cache, reaper) = offline_app();

        cache
            .add(
                format!("{BASE}/location-area/eterna-city-area"),
                br#"{"name": "eterna-city-area", "pokemon_encounters": [
                    {"pokemon": {"name": "psyduck", "url": ""}},
                    {"pokemon": {"name": "magikarp", "url": ""}}
                ]}"#
                .to_vec(),
            )
            .await;

        let output = app
            .execute(Command::Explore("eterna-city-area".to_string()))
            .await
            .unwrap();
        assert_eq!(output, "psyduck\nmagikarp");

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_catch_then_inspect_and_pokedex() {
        let (mut app, cache, reaper) = offline_app();

        // Capture rate 255 guarantees the catch.
        cache
            .add(
                format!("{BASE}/pokemon-species/pikachu"),
                br#"{"name": "pikachu", "capture_rate": 255}"#.to_vec(),
            )
            .await;
        cache
            .add(
                format!("{BASE}/pokemon/pikachu"),
                br#"{"name": "pikachu", "height": 4, "weight": 60,
                    "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": ""}}],
                    "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]}"#
                    .to_vec(),
            )
            .await;

        let output = app
            .execute(Command::Catch("pikachu".to_string()))
            .await
            .unwrap();
        assert_eq!(output, "pikachu has been captured!");

        let inspection = app
            .execute(Command::Inspect("pikachu".to_string()))
            .await
            .unwrap();
        assert!(inspection.contains("Name: pikachu"));
        assert!(inspection.contains("\t-hp: 35"));
        assert!(inspection.contains("\t-electric"));

        let listing = app.execute(Command::Pokedex).await.unwrap();
        assert_eq!(listing, "Your Pokemon:\n\t-pikachu");

        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_inspect_uncaught_is_an_error() {
        let (mut app, _cache, reaper) = offline_app();

        assert!(matches!(
            app.execute(Command::Inspect("mewtwo".to_string())).await,
            Err(PokedexError::NotCaught(_))
        ));

        reaper.shutdown().await;
    }
}
