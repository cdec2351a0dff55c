// User endpoints
use super::SpotifyClient;
use crate::models::{Artist, TopArtistsResponse, User};
use crate::utils::{http, ApiError};

pub async fn fetch_me(client: &SpotifyClient) -> Result<User, ApiError> {
    http::send_json(client.get("me")?, "current user").await
}

/// The user's most listened artists, used as discovery seed candidates
pub async fn fetch_top_artists(client: &SpotifyClient, limit: u32) -> Result<Vec<Artist>, ApiError> {
    let request = client.get("me/top/artists")?.query(&[("limit", limit)]);
    let response: TopArtistsResponse = http::send_json(request, "top artists").await?;
    Ok(response.items)
}
