use crate::api::SpotifyApi;
use crate::constants::{PLAYLIST_DESCRIPTION, PLAYLIST_NAME};
use crate::models::Playlist;
use crate::utils::ApiError;

/// Create "Running Playlist" for the current user and fill it with `track_uris`.
///
/// The tracks go in with one call, in the given order. Nothing is rolled back:
/// if adding tracks fails, the new playlist stays behind empty.
pub async fn create_playlist(
    api: &dyn SpotifyApi,
    track_uris: &[String],
) -> Result<Playlist, ApiError> {
    let me = api.me().await?;
    let playlist = api
        .create_playlist(&me.id, PLAYLIST_NAME, PLAYLIST_DESCRIPTION)
        .await?;
    log::info!("[Playlist] Created playlist {} for user {}", playlist.id, me.id);

    if let Err(e) = api.add_tracks_to_playlist(&playlist.id, track_uris).await {
        log::error!(
            "[Playlist] Failed to add {} tracks, playlist {} left empty: {}",
            track_uris.len(),
            playlist.id,
            e
        );
        return Err(e);
    }

    log::info!(
        "[Playlist] Added {} tracks to {}",
        track_uris.len(),
        playlist.external_url()
    );

    Ok(playlist)
}
