use crate::models::{AudioFeatures, EnrichedTrack, Track};
use std::collections::HashMap;

/// Everything known about one id after joining tracks with audio features.
///
/// Either half may be missing when the two inputs do not line up.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTrack {
    pub id: String,
    pub track: Option<Track>,
    pub features: Option<AudioFeatures>,
}

impl MergedTrack {
    /// Right-biased: whatever `other` carries replaces what `self` has
    fn absorb(&mut self, other: MergedTrack) {
        if other.track.is_some() {
            self.track = other.track;
        }
        if other.features.is_some() {
            self.features = other.features;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.track.is_some() && self.features.is_some()
    }

    /// `None` for a partial record
    pub fn into_enriched(self) -> Option<EnrichedTrack> {
        match (self.track, self.features) {
            (Some(track), Some(features)) => Some(EnrichedTrack::from_parts(track, features)),
            _ => None,
        }
    }
}

impl From<Track> for MergedTrack {
    fn from(track: Track) -> Self {
        Self {
            id: track.id.clone(),
            track: Some(track),
            features: None,
        }
    }
}

impl From<AudioFeatures> for MergedTrack {
    fn from(features: AudioFeatures) -> Self {
        Self {
            id: features.id.clone(),
            track: None,
            features: Some(features),
        }
    }
}

/// Collapse records sharing an id into one, later records winning.
///
/// Output keeps first-seen order, though callers should not depend on it.
pub fn merge_records(records: impl IntoIterator<Item = MergedTrack>) -> Vec<MergedTrack> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<MergedTrack> = Vec::new();

    for record in records {
        match positions.get(&record.id) {
            Some(&index) => merged[index].absorb(record),
            None => {
                positions.insert(record.id.clone(), merged.len());
                merged.push(record);
            }
        }
    }

    merged
}

/// Join tracks with their audio features by id
pub fn merge_by_id(tracks: Vec<Track>, features: Vec<AudioFeatures>) -> Vec<MergedTrack> {
    let records = tracks
        .into_iter()
        .map(MergedTrack::from)
        .chain(features.into_iter().map(MergedTrack::from));
    merge_records(records)
}

/// Keep only records carrying both halves.
///
/// A track without features cannot be judged on tempo, so it is dropped here
/// instead of reaching the threshold filter.
pub fn complete_tracks(merged: Vec<MergedTrack>) -> Vec<EnrichedTrack> {
    let total = merged.len();
    let enriched: Vec<EnrichedTrack> = merged
        .into_iter()
        .filter(MergedTrack::is_complete)
        .filter_map(MergedTrack::into_enriched)
        .collect();

    if enriched.len() < total {
        log::debug!(
            "[Merge] Dropped {} of {} records missing a track or its audio features",
            total - enriched.len(),
            total
        );
    }

    enriched
}
