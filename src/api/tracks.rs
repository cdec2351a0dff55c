// Track endpoints: saved library, audio features, recommendations
use super::SpotifyClient;
use crate::models::{
    AudioFeatures, AudioFeaturesResponse, RecommendationsResponse, SavedTracksPage, Track,
};
use crate::utils::{http, ApiError};

/// Query for `GET /recommendations`
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub min_energy: f64,
    pub min_valence: f64,
    pub min_tempo: f64,
    pub limit: u32,
    pub seed_artists: Vec<String>,
}

impl RecommendationQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("min_energy", self.min_energy.to_string()),
            ("min_valence", self.min_valence.to_string()),
            ("min_tempo", self.min_tempo.to_string()),
            ("limit", self.limit.to_string()),
            ("seed_artists", self.seed_artists.join(",")),
        ]
    }
}

pub async fn fetch_saved_tracks_page(
    client: &SpotifyClient,
    limit: u32,
    offset: u32,
) -> Result<SavedTracksPage, ApiError> {
    log::debug!("[Tracks] Fetching saved tracks: limit={} offset={}", limit, offset);

    let request = client
        .get("me/tracks")?
        .query(&[("limit", limit), ("offset", offset)]);
    http::send_json(request, "saved tracks").await
}

pub async fn fetch_audio_features(
    client: &SpotifyClient,
    ids: &[String],
) -> Result<Vec<AudioFeatures>, ApiError> {
    log::debug!("[Tracks] Fetching audio features for {} ids", ids.len());

    let request = client
        .get("audio-features")?
        .query(&[("ids", ids.join(","))]);
    let response: AudioFeaturesResponse = http::send_json(request, "audio features").await?;

    let requested = response.audio_features.len();
    let features: Vec<AudioFeatures> = response.audio_features.into_iter().flatten().collect();
    if features.len() < requested {
        log::debug!(
            "[Tracks] {} of {} ids had no audio features",
            requested - features.len(),
            requested
        );
    }

    Ok(features)
}

pub async fn fetch_recommendations(
    client: &SpotifyClient,
    query: &RecommendationQuery,
) -> Result<Vec<Track>, ApiError> {
    log::debug!(
        "[Tracks] Fetching recommendations: min_tempo={} seeds={}",
        query.min_tempo,
        query.seed_artists.len()
    );

    let request = client.get("recommendations")?.query(&query.to_query_pairs());
    let response: RecommendationsResponse = http::send_json(request, "recommendations").await?;
    Ok(response.tracks)
}
