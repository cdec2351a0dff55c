// Spotify Web API client modules

pub mod client;
pub mod playlists;
pub mod tracks;
pub mod users;

#[cfg(test)]
pub(crate) mod fake;

pub use client::SpotifyClient;
pub use tracks::RecommendationQuery;

use crate::models::{Artist, AudioFeatures, Playlist, SavedTracksPage, Track, User};
use crate::utils::ApiError;
use async_trait::async_trait;

/// The remote calls the track pipeline depends on.
///
/// Pipeline functions take an implementation explicitly instead of reaching
/// for a global client, so each stage can run against a fake.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// One page of the user's saved tracks
    async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage, ApiError>;

    /// Audio features for at most 100 ids. Ids Spotify has no data for are left out.
    async fn audio_features(&self, ids: &[String]) -> Result<Vec<AudioFeatures>, ApiError>;

    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Track>, ApiError>;

    /// The authenticated user
    async fn me(&self) -> Result<User, ApiError>;

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ApiError>;

    async fn add_tracks_to_playlist(&self, playlist_id: &str, uris: &[String])
        -> Result<(), ApiError>;

    async fn top_artists(&self, limit: u32) -> Result<Vec<Artist>, ApiError>;
}
