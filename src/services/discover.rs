// Discover branch: recommendations seeded from the user's chosen artists
use crate::api::{RecommendationQuery, SpotifyApi};
use crate::constants::{MIN_ENERGY, MIN_VALENCE, RECOMMENDATIONS_LIMIT, TOP_ARTISTS_LIMIT};
use crate::models::{Seed, Track};
use crate::services::filter::select_seed_artists;
use crate::utils::ApiError;

/// Build the recommendation query; needs at least one artist seed
pub fn recommendation_query(seeds: &[Seed], min_tempo: f64) -> Result<RecommendationQuery, ApiError> {
    let seed_artists = select_seed_artists(seeds);
    if seed_artists.is_empty() {
        return Err(ApiError::InvalidRequest(
            "at least one artist seed is required for recommendations".to_string(),
        ));
    }

    Ok(RecommendationQuery {
        min_energy: MIN_ENERGY,
        min_valence: MIN_VALENCE,
        min_tempo,
        limit: RECOMMENDATIONS_LIMIT,
        seed_artists,
    })
}

pub async fn get_recommended_tracks(
    api: &dyn SpotifyApi,
    seeds: &[Seed],
    min_tempo: f64,
) -> Result<Vec<Track>, ApiError> {
    let query = recommendation_query(seeds, min_tempo)?;
    let tracks = api.recommendations(&query).await?;

    log::info!(
        "[Discover] {} recommendations from {} seed artists at {} BPM+",
        tracks.len(),
        query.seed_artists.len(),
        min_tempo
    );

    Ok(tracks)
}

/// The user's top artists as seed candidates
pub async fn top_artist_seeds(api: &dyn SpotifyApi) -> Result<Vec<Seed>, ApiError> {
    let artists = api.top_artists(TOP_ARTISTS_LIMIT).await?;
    if artists.is_empty() {
        log::warn!("[Discover] No top artists found for this user");
    }

    Ok(artists
        .into_iter()
        .map(|artist| Seed::artist(artist.id, artist.name))
        .collect())
}
