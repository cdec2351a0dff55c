// Wire envelopes for Spotify list endpoints and request bodies
use super::{Artist, AudioFeatures, Track};
use serde::{Deserialize, Serialize};

/// One page of `GET /me/tracks`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavedTracksPage {
    pub items: Vec<SavedTrackItem>,
    pub next: Option<String>, // Present while more pages exist
    pub total: Option<u32>,
}

impl SavedTracksPage {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SavedTrackItem {
    pub added_at: Option<String>,
    pub track: Track,
}

/// `GET /audio-features?ids=...`; unknown ids come back as `null`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct CreatePlaylistRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize, Clone)]
pub struct AddTracksRequest<'a> {
    pub uris: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_tracks_page_reports_next() {
        let json = r#"{
            "items": [{
                "added_at": "2020-05-01T10:00:00Z",
                "track": {"id": "t1", "name": "One", "artists": [], "uri": "spotify:track:t1", "album": null}
            }],
            "next": "https://api.spotify.com/v1/me/tracks?offset=50&limit=50",
            "total": 120
        }"#;

        let page: SavedTracksPage = serde_json::from_str(json).unwrap();
        assert!(page.has_next());
        assert_eq!(page.items[0].track.id, "t1");
    }

    #[test]
    fn audio_features_tolerates_null_entries() {
        let json = r#"{"audio_features": [
            {"id": "t1", "tempo": 170.2, "energy": 0.8, "valence": 0.6, "danceability": 0.7},
            null
        ]}"#;

        let response: AudioFeaturesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.audio_features.len(), 2);
        assert!(response.audio_features[1].is_none());
        assert_eq!(response.audio_features[0].as_ref().unwrap().tempo, 170.2);
    }
}
