use serde::{Deserialize, Serialize};

/// Per-track descriptors computed by Spotify.
///
/// Only the fields used for running-playlist selection are kept; the rest of
/// the wire object (danceability, key, loudness, ...) is ignored on decode.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AudioFeatures {
    pub id: String,
    pub tempo: f64,   // BPM
    pub energy: f64,  // 0.0 - 1.0
    pub valence: f64, // 0.0 - 1.0, musical positivity
}
