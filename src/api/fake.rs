// In-memory SpotifyApi used by pipeline tests
use super::{RecommendationQuery, SpotifyApi};
use crate::constants::AUDIO_FEATURES_BATCH_SIZE;
use crate::models::{
    Artist, AudioFeatures, ExternalUrls, Playlist, SavedTrackItem, SavedTracksPage, Track, User,
};
use crate::utils::ApiError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    SavedTracks { limit: u32, offset: u32 },
    AudioFeatures(Vec<String>),
    Recommendations(RecommendationQuery),
    Me,
    CreatePlaylist { user_id: String, name: String, description: String },
    AddTracks { playlist_id: String, uris: Vec<String> },
    TopArtists(u32),
}

#[derive(Default)]
pub(crate) struct FakeSpotify {
    pub saved: Vec<Track>,
    pub features: HashMap<String, AudioFeatures>,
    pub recommended: Vec<Track>,
    pub top_artists: Vec<Artist>,
    /// Endpoint name ("saved_tracks", "add_tracks", ...) that answers with a 500
    pub fail_on: Option<&'static str>,
    /// Fail any audio-features batch containing this id
    pub fail_features_for: Option<String>,
    /// Fail the saved-tracks page starting at this offset
    pub fail_saved_at_offset: Option<u32>,
    /// Suspend each audio-features call this long before answering
    pub features_delay: Option<Duration>,
    pub features_in_flight: AtomicUsize,
    pub features_peak_in_flight: AtomicUsize,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeSpotify {
    pub fn with_saved(saved: Vec<Track>) -> Self {
        Self {
            saved,
            ..Default::default()
        }
    }

    pub fn add_features(&mut self, features: AudioFeatures) {
        self.features.insert(features.id.clone(), features);
    }

    pub fn peak_features_in_flight(&self) -> usize {
        self.features_peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.fail_on == Some(endpoint) {
            return Err(ApiError::Status {
                status: 500,
                body: format!("{} failed", endpoint),
            });
        }
        Ok(())
    }
}

pub(crate) fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        name: format!("Track {}", id),
        artists: vec![Artist {
            id: format!("artist-{}", id),
            name: format!("Artist {}", id),
        }],
        uri: format!("spotify:track:{}", id),
        album: None,
    }
}

pub(crate) fn features(id: &str, tempo: f64, energy: f64, valence: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        tempo,
        energy,
        valence,
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn saved_tracks(&self, limit: u32, offset: u32) -> Result<SavedTracksPage, ApiError> {
        self.record("saved_tracks", Call::SavedTracks { limit, offset })?;
        if self.fail_saved_at_offset == Some(offset) {
            return Err(ApiError::Status {
                status: 503,
                body: format!("page at offset {} unavailable", offset),
            });
        }

        let start = (offset as usize).min(self.saved.len());
        let end = (start + limit as usize).min(self.saved.len());
        let items = self.saved[start..end]
            .iter()
            .cloned()
            .map(|track| SavedTrackItem {
                added_at: None,
                track,
            })
            .collect();
        let next = (end < self.saved.len())
            .then(|| format!("https://api.spotify.com/v1/me/tracks?offset={}&limit={}", end, limit));

        Ok(SavedTracksPage {
            items,
            next,
            total: Some(self.saved.len() as u32),
        })
    }

    async fn audio_features(&self, ids: &[String]) -> Result<Vec<AudioFeatures>, ApiError> {
        self.record("audio_features", Call::AudioFeatures(ids.to_vec()))?;

        if let Some(delay) = self.features_delay {
            let in_flight = self.features_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.features_peak_in_flight.fetch_max(in_flight, Ordering::SeqCst);
            tokio::time::sleep(delay).await;
            self.features_in_flight.fetch_sub(1, Ordering::SeqCst);
        }

        if ids.len() > AUDIO_FEATURES_BATCH_SIZE {
            return Err(ApiError::Status {
                status: 400,
                body: "too many ids requested".to_string(),
            });
        }
        if let Some(bad) = &self.fail_features_for {
            if ids.contains(bad) {
                return Err(ApiError::Status {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }
        }

        // Reverse order so callers cannot rely on positions lining up
        Ok(ids
            .iter()
            .rev()
            .filter_map(|id| self.features.get(id).cloned())
            .collect())
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Track>, ApiError> {
        self.record("recommendations", Call::Recommendations(query.clone()))?;
        Ok(self.recommended.clone())
    }

    async fn me(&self) -> Result<User, ApiError> {
        self.record("me", Call::Me)?;
        Ok(User {
            id: "runner".to_string(),
            display_name: Some("Runner".to_string()),
        })
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
    ) -> Result<Playlist, ApiError> {
        self.record(
            "create_playlist",
            Call::CreatePlaylist {
                user_id: user_id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
            },
        )?;
        Ok(Playlist {
            id: "playlist-1".to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            external_urls: ExternalUrls {
                spotify: "https://open.spotify.com/playlist/playlist-1".to_string(),
            },
            uri: Some("spotify:playlist:playlist-1".to_string()),
        })
    }

    async fn add_tracks_to_playlist(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), ApiError> {
        self.record(
            "add_tracks",
            Call::AddTracks {
                playlist_id: playlist_id.to_string(),
                uris: uris.to_vec(),
            },
        )
    }

    async fn top_artists(&self, limit: u32) -> Result<Vec<Artist>, ApiError> {
        self.record("top_artists", Call::TopArtists(limit))?;
        Ok(self.top_artists.iter().take(limit as usize).cloned().collect())
    }
}
