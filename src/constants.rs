//! Application constants and configuration values

// === Spotify Web API ===
pub const SPOTIFY_API_BASE_URL: &str = "https://api.spotify.com/v1";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// === Saved Tracks ===
pub const SAVED_TRACKS_PAGE_SIZE: u32 = 50; // Max page size for /me/tracks
pub const SAVED_TRACKS_FETCH_TARGET: usize = 1000;

// === Audio Features ===
pub const AUDIO_FEATURES_BATCH_SIZE: usize = 100; // Hard cap per /audio-features request

// === Thresholds ===
pub const MIN_ENERGY: f64 = 0.5;
pub const MIN_VALENCE: f64 = 0.3;
pub const DEFAULT_MIN_TEMPO: f64 = 165.0;

// === Recommendations ===
pub const RECOMMENDATIONS_LIMIT: u32 = 50;
pub const MAX_SEED_ARTISTS: usize = 5;
pub const TOP_ARTISTS_LIMIT: u32 = 50;
pub const SEEDS_PER_PAGE: usize = 15;

// === Playlist ===
pub const PLAYLIST_NAME: &str = "Running Playlist";
pub const PLAYLIST_DESCRIPTION: &str = "Your running playlist, created using Tempo Run.";
