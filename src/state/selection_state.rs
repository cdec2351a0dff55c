use crate::constants::{DEFAULT_MIN_TEMPO, MAX_SEED_ARTISTS, SEEDS_PER_PAGE};
use crate::models::{PaceOption, PlaylistType, Seed};

/// Choices made while setting up a playlist
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub playlist_type: PlaylistType,
    pub min_tempo: f64,
    seeds: Vec<Seed>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            playlist_type: PlaylistType::default(),
            min_tempo: DEFAULT_MIN_TEMPO,
            seeds: Vec::new(),
        }
    }
}

impl SelectionState {
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    pub fn is_seed_selected(&self, seed_id: &str) -> bool {
        self.seeds.iter().any(|s| s.id == seed_id)
    }

    /// No more seeds can be picked
    pub fn seeds_full(&self) -> bool {
        self.seeds.len() >= MAX_SEED_ARTISTS
    }

    /// Returns false when the seed was refused (already picked, or five picked)
    pub fn add_seed(&mut self, seed: Seed) -> bool {
        if self.seeds_full() {
            log::warn!(
                "[Selection] Seed limit of {} reached, ignoring {}",
                MAX_SEED_ARTISTS,
                seed.name
            );
            return false;
        }
        if self.is_seed_selected(&seed.id) {
            return false;
        }
        self.seeds.push(seed);
        true
    }

    pub fn remove_seed(&mut self, seed_id: &str) -> bool {
        let before = self.seeds.len();
        self.seeds.retain(|s| s.id != seed_id);
        self.seeds.len() != before
    }

    pub fn choose_pace(&mut self, pace: &PaceOption) {
        self.min_tempo = pace.min_tempo();
    }

    /// One page of candidate seeds, skipping ones already picked.
    ///
    /// `page` wraps around, so asking for the next page forever cycles through
    /// the list.
    pub fn seed_candidates(&self, candidates: &[Seed], page: usize) -> Vec<Seed> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let page_count = candidates.len().div_ceil(SEEDS_PER_PAGE);
        let first = (page % page_count) * SEEDS_PER_PAGE;
        let last = (first + SEEDS_PER_PAGE).min(candidates.len());

        candidates[first..last]
            .iter()
            .filter(|seed| !self.is_seed_selected(&seed.id))
            .cloned()
            .collect()
    }

    /// Back to defaults for a fresh run
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PACE_OPTIONS;

    fn artists(count: usize) -> Vec<Seed> {
        (0..count)
            .map(|i| Seed::artist(format!("a{}", i), format!("Artist {}", i)))
            .collect()
    }

    #[test]
    fn defaults_to_my_tracks_at_165() {
        let selection = SelectionState::default();
        assert_eq!(selection.playlist_type, PlaylistType::MyTracks);
        assert_eq!(selection.min_tempo, 165.0);
        assert!(selection.seeds().is_empty());
    }

    #[test]
    fn add_seed_caps_at_five_and_skips_duplicates() {
        let mut selection = SelectionState::default();
        for seed in artists(5) {
            assert!(selection.add_seed(seed));
        }
        assert!(selection.seeds_full());
        assert!(!selection.add_seed(Seed::artist("a9", "Late")));

        selection.remove_seed("a0");
        assert!(!selection.add_seed(Seed::artist("a1", "Artist 1")));
        assert!(selection.add_seed(Seed::artist("a9", "Late")));
        assert_eq!(selection.seeds().len(), 5);
    }

    #[test]
    fn remove_unknown_seed_is_a_no_op() {
        let mut selection = SelectionState::default();
        selection.add_seed(Seed::artist("a0", "Zero"));
        assert!(!selection.remove_seed("nope"));
        assert_eq!(selection.seeds().len(), 1);
    }

    #[test]
    fn pace_sets_min_tempo() {
        let mut selection = SelectionState::default();
        selection.choose_pace(&PACE_OPTIONS[1]);
        assert_eq!(selection.min_tempo, 156.0);
    }

    #[test]
    fn candidate_pages_wrap_and_hide_selected() {
        let all = artists(40);
        let mut selection = SelectionState::default();
        selection.add_seed(all[1].clone());

        let first = selection.seed_candidates(&all, 0);
        assert_eq!(first.len(), 14);
        assert!(first.iter().all(|s| s.id != "a1"));

        let third = selection.seed_candidates(&all, 2);
        assert_eq!(third.len(), 10);
        assert_eq!(third[0].id, "a30");

        // Page 3 of 3 pages wraps back to the first
        assert_eq!(selection.seed_candidates(&all, 3), first);
        assert!(selection.seed_candidates(&[], 7).is_empty());
    }

    #[test]
    fn reset_clears_choices() {
        let mut selection = SelectionState::default();
        selection.playlist_type = PlaylistType::Discover;
        selection.min_tempo = 150.0;
        selection.add_seed(Seed::artist("a0", "Zero"));

        selection.reset();

        assert_eq!(selection, SelectionState::default());
    }
}
