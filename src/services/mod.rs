/// Services module - track pipeline
///
/// Each stage takes the Spotify API explicitly, so stages can be exercised on
/// their own. The "my tracks" branch runs saved tracks -> audio features ->
/// merge -> filter; the "discover" branch goes straight to recommendations.

pub mod audio_features;
pub mod discover;
pub mod filter;
pub mod generator;
pub mod merge;
pub mod playlist;
pub mod saved_tracks;

// Re-export commonly used functions
pub use audio_features::fetch_audio_features;
pub use discover::{get_recommended_tracks, recommendation_query, top_artist_seeds};
pub use filter::{filter_by_threshold, meets_thresholds, select_seed_artists};
pub use generator::{generate_tracks, get_saved_tracks_with_audio_features, GeneratedTracks};
pub use merge::{complete_tracks, merge_by_id, merge_records, MergedTrack};
pub use playlist::create_playlist;
pub use saved_tracks::fetch_saved_tracks;
