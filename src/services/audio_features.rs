use crate::api::SpotifyApi;
use crate::constants::AUDIO_FEATURES_BATCH_SIZE;
use crate::models::AudioFeatures;
use crate::utils::ApiError;
use futures_util::future::try_join_all;

/// Fetch audio features for `ids` in batches of at most 100.
///
/// All batches are in flight together and the result is only produced once
/// every one has succeeded; a single failed batch fails the call. Batches are
/// concatenated in order, but Spotify's order inside a batch is not promised,
/// so callers must join on id.
pub async fn fetch_audio_features(
    api: &dyn SpotifyApi,
    ids: &[String],
) -> Result<Vec<AudioFeatures>, ApiError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let batches: Vec<&[String]> = ids.chunks(AUDIO_FEATURES_BATCH_SIZE).collect();
    log::debug!(
        "[AudioFeatures] Requesting {} ids in {} batches",
        ids.len(),
        batches.len()
    );

    let results = try_join_all(batches.into_iter().map(|batch| api.audio_features(batch))).await?;
    let features: Vec<AudioFeatures> = results.into_iter().flatten().collect();

    log::info!(
        "[AudioFeatures] Received features for {} of {} tracks",
        features.len(),
        ids.len()
    );

    Ok(features)
}
