// Data models for Spotify Web API entities

pub mod audio_features;
pub mod enriched;
pub mod pace;
pub mod playlist;
pub mod responses;
pub mod seed;
pub mod track;
pub mod user;

// Re-export commonly used types
pub use audio_features::AudioFeatures;
pub use enriched::EnrichedTrack;
pub use pace::{PaceOption, PACE_OPTIONS};
pub use playlist::{ExternalUrls, Playlist, PlaylistType};
pub use responses::{
    AddTracksRequest, AudioFeaturesResponse, CreatePlaylistRequest, RecommendationsResponse,
    SavedTrackItem, SavedTracksPage, SnapshotResponse, TopArtistsResponse,
};
pub use seed::{Seed, SeedKind};
pub use track::{Album, Artist, Image, Track};
pub use user::User;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
///
/// Spotify returns `"id": null` for local files in a user's library.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
