//! PokeAPI Module
//!
//! HTTP client for PokeAPI, layered on the timed response cache.

mod client;

pub use client::PokeApiClient;
