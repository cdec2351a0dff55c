//! Running playlist generator for Spotify.
//!
//! Picks tracks whose tempo, energy and valence suit a running pace, either
//! from the user's saved library or from artist-seeded recommendations, and
//! turns them into a playlist.

pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use api::{SpotifyApi, SpotifyClient};
pub use utils::ApiError;
