use super::{Album, Artist, AudioFeatures, Track};
use serde::{Deserialize, Serialize};

/// A saved track joined with its audio features by id.
///
/// Always carries both halves; records missing either side never become an
/// `EnrichedTrack` (see `services::merge`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EnrichedTrack {
    pub id: String,
    pub name: String,
    pub artists: Vec<Artist>,
    pub uri: String,
    pub album: Option<Album>,
    pub tempo: f64,
    pub energy: f64,
    pub valence: f64,
}

impl EnrichedTrack {
    pub fn from_parts(track: Track, features: AudioFeatures) -> Self {
        Self {
            id: track.id,
            name: track.name,
            artists: track.artists,
            uri: track.uri,
            album: track.album,
            tempo: features.tempo,
            energy: features.energy,
            valence: features.valence,
        }
    }

    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn display_line(&self) -> String {
        format!(
            "{} - {} ({:.0} BPM)",
            self.name,
            self.artist_names().join(", "),
            self.tempo
        )
    }
}
