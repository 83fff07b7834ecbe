//! Pokedex CLI - a PokeAPI browser with a timed response cache
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the timed cache and start its background reaper
//! 4. Build the PokeAPI client and application state
//! 5. Run the REPL until `exit` or end of input
//! 6. Stop the reaper and wait for it to finish before returning

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cache::TimedCache;
use pokedex::commands::{App, Command};
use pokedex::config::Config;
use pokedex::pokeapi::PokeApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        ttl_secs = config.cache_ttl,
        reap_interval_secs = config.reap_interval,
        api = %config.api_base_url,
        "starting pokedex"
    );

    // Create the cache; the reaper starts with it
    let (cache, reaper) = TimedCache::new(config.cache_ttl(), config.reap_interval());
    let client = PokeApiClient::new(config.api_base_url.clone(), cache);
    let mut app = App::new(client);

    run_repl(&mut app).await?;

    // Stop the reaper and join it so no reap pass runs during teardown
    info!("shutting down");
    reaper.shutdown().await;

    Ok(())
}

/// Reads commands from stdin until `exit` or end of input.
async fn run_repl(app: &mut App) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // End of input (Ctrl+D)
            println!();
            break;
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(Command::Exit) => {
                println!("Goodbye!");
                break;
            }
            Ok(command) => match app.execute(command).await {
                Ok(output) => println!("{output}"),
                Err(err) => println!("error: {err}"),
            },
            Err(err) => println!("error: {err}"),
        }
    }

    Ok(())
}
