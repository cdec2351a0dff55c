// Runs whichever branch the chosen playlist type selects
use crate::api::SpotifyApi;
use crate::constants::SAVED_TRACKS_FETCH_TARGET;
use crate::models::{EnrichedTrack, PlaylistType, Seed, Track};
use crate::services::{
    complete_tracks, fetch_audio_features, fetch_saved_tracks, filter_by_threshold,
    get_recommended_tracks, merge_by_id,
};
use crate::utils::ApiError;
use serde::Serialize;

/// Tracks picked for the playlist, shaped by the branch that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedTracks {
    MyTracks(Vec<EnrichedTrack>),
    Discover(Vec<Track>),
}

impl GeneratedTracks {
    pub fn len(&self) -> usize {
        match self {
            GeneratedTracks::MyTracks(tracks) => tracks.len(),
            GeneratedTracks::Discover(tracks) => tracks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn uris(&self) -> Vec<String> {
        match self {
            GeneratedTracks::MyTracks(tracks) => tracks.iter().map(|t| t.uri.clone()).collect(),
            GeneratedTracks::Discover(tracks) => tracks.iter().map(|t| t.uri.clone()).collect(),
        }
    }

    pub fn display_lines(&self) -> Vec<String> {
        match self {
            GeneratedTracks::MyTracks(tracks) => tracks.iter().map(|t| t.display_line()).collect(),
            GeneratedTracks::Discover(tracks) => tracks.iter().map(|t| t.display_line()).collect(),
        }
    }
}

/// Saved tracks above `min_tempo` that are also energetic and upbeat
pub async fn get_saved_tracks_with_audio_features(
    api: &dyn SpotifyApi,
    min_tempo: f64,
) -> Result<Vec<EnrichedTrack>, ApiError> {
    let saved = fetch_saved_tracks(api, SAVED_TRACKS_FETCH_TARGET).await?;

    // Local files have no catalog id and so no audio features
    let ids: Vec<String> = saved
        .iter()
        .filter(|track| !track.id.is_empty())
        .map(|track| track.id.clone())
        .collect();
    let features = fetch_audio_features(api, &ids).await?;

    let enriched = complete_tracks(merge_by_id(saved, features));
    let filtered = filter_by_threshold(enriched, min_tempo);

    log::info!(
        "[Generator] {} saved tracks match {} BPM+",
        filtered.len(),
        min_tempo
    );

    Ok(filtered)
}

pub async fn generate_tracks(
    api: &dyn SpotifyApi,
    playlist_type: PlaylistType,
    seeds: &[Seed],
    min_tempo: f64,
) -> Result<GeneratedTracks, ApiError> {
    log::info!(
        "[Generator] Building {:?} playlist at {} BPM+",
        playlist_type,
        min_tempo
    );

    match playlist_type {
        PlaylistType::Discover => get_recommended_tracks(api, seeds, min_tempo)
            .await
            .map(GeneratedTracks::Discover),
        PlaylistType::MyTracks => get_saved_tracks_with_audio_features(api, min_tempo)
            .await
            .map(GeneratedTracks::MyTracks),
    }
}
