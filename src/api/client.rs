use super::{playlists, tracks, users, RecommendationQuery, SpotifyApi};
use crate::constants::SPOTIFY_API_BASE_URL;
use crate::models::{Artist, AudioFeatures, Playlist, SavedTracksPage, Track, User};
use crate::state::TokenData;
use crate::utils::{http, ApiError};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use std::time::Duration;

/// HTTP implementation of [`SpotifyApi`] bound to one user's bearer token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    token: TokenData,
}

impl SpotifyClient {
    pub fn new(token: TokenData) -> Self {
        Self::with_base_url(token, SPOTIFY_API_BASE_URL)
    }

    pub fn with_base_url(token: TokenData, base_url: impl Into<String>) -> Self {
        Self {
            http: http::shared_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Replace the shared client with one using a different per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ApiError> {
        self.http = http::build_client(timeout)?;
        Ok(self)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Bearer token, refused once past its expiry so no request goes out with it
    fn access_token(&self) -> Result<&str, ApiError> {
        if self.token.is_expired() {
            log::warn!("[Http] Access token expired, refusing request");
            return Err(ApiError::TokenExpired);
        }
        Ok(&self.token.access_token)
    }

    pub(crate) fn get(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.access_token()?;
        Ok(self.http.get(self.url(path)).bearer_auth(token))
    }

    pub(crate) fn post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.access_token()?;
        Ok(self.http.post(self.url(path)).bearer_auth(token))
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage, ApiError> {
        tracks::fetch_saved_tracks_page(self, limit, offset).await
    }

    async fn audio_features(&self, ids: &[String]) -> Result<Vec<AudioFeatures>, ApiError> {
        tracks::fetch_audio_features(self, ids).await
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Track>, ApiError> {
        tracks::fetch_recommendations(self, query).await
    }

    async fn me(&self) -> Result<User, ApiError> {
        users::fetch_me(self).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ApiError> {
        playlists::create_playlist(self, user_id, name, description).await
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), ApiError> {
        playlists::add_tracks_to_playlist(self, playlist_id, uris).await
    }

    async fn top_artists(&self, limit: u32) -> Result<Vec<Artist>, ApiError> {
        users::fetch_top_artists(self, limit).await
    }
}
