use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub external_urls: ExternalUrls,
    pub uri: Option<String>,
}

impl Playlist {
    /// Shareable link to open the playlist in Spotify
    pub fn external_url(&self) -> &str {
        &self.external_urls.spotify
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExternalUrls {
    pub spotify: String,
}

/// Which branch builds the playlist.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlaylistType {
    /// Recommendations seeded from chosen artists
    Discover,
    /// The user's own saved tracks, filtered by audio features
    #[default]
    MyTracks,
}
