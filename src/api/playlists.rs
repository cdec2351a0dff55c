// Playlist API endpoints
use super::SpotifyClient;
use crate::models::{AddTracksRequest, CreatePlaylistRequest, Playlist, SnapshotResponse};
use crate::utils::{http, ApiError};

pub async fn create_playlist(
    client: &SpotifyClient,
    user_id: &str,
    name: &str,
    description: &str,
) -> Result<Playlist, ApiError> {
    let path = format!("users/{}/playlists", urlencoding::encode(user_id));
    log::debug!("[Playlists] Creating playlist '{}' for user {}", name, user_id);

    let request = client
        .post(&path)?
        .json(&CreatePlaylistRequest { name, description });
    http::send_json(request, "create playlist").await
}

pub async fn add_tracks_to_playlist(
    client: &SpotifyClient,
    playlist_id: &str,
    uris: &[String],
) -> Result<(), ApiError> {
    let path = format!("playlists/{}/tracks", urlencoding::encode(playlist_id));
    log::debug!("[Playlists] Adding {} tracks to playlist {}", uris.len(), playlist_id);

    let request = client.post(&path)?.json(&AddTracksRequest { uris });
    let snapshot: SnapshotResponse = http::send_json(request, "add tracks").await?;
    log::debug!("[Playlists] Playlist snapshot is now {}", snapshot.snapshot_id);
    Ok(())
}
