use crate::constants::{MAX_SEED_ARTISTS, MIN_ENERGY, MIN_VALENCE};
use crate::models::{EnrichedTrack, Seed, SeedKind};

/// Strictly above every threshold; a track sitting exactly on one is out
pub fn meets_thresholds(track: &EnrichedTrack, min_tempo: f64) -> bool {
    track.valence > MIN_VALENCE && track.energy > MIN_ENERGY && track.tempo > min_tempo
}

pub fn filter_by_threshold(tracks: Vec<EnrichedTrack>, min_tempo: f64) -> Vec<EnrichedTrack> {
    let total = tracks.len();
    let kept: Vec<EnrichedTrack> = tracks
        .into_iter()
        .filter(|track| meets_thresholds(track, min_tempo))
        .collect();

    log::debug!(
        "[Filter] {} of {} tracks above {} BPM, energy {}, valence {}",
        kept.len(),
        total,
        min_tempo,
        MIN_ENERGY,
        MIN_VALENCE
    );

    kept
}

/// Ids of the first five artist seeds, in the order they were picked
pub fn select_seed_artists(seeds: &[Seed]) -> Vec<String> {
    seeds
        .iter()
        .filter(|seed| seed.kind == SeedKind::Artist)
        .take(MAX_SEED_ARTISTS)
        .map(|seed| seed.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{features, track};

    fn enriched(id: &str, tempo: f64, energy: f64, valence: f64) -> EnrichedTrack {
        EnrichedTrack::from_parts(track(id), features(id, tempo, energy, valence))
    }

    #[test]
    fn keeps_tracks_above_all_thresholds() {
        let tracks = vec![
            enriched("fast", 170.0, 0.8, 0.6),
            enriched("slow", 120.0, 0.8, 0.6),
            enriched("calm", 170.0, 0.3, 0.6),
            enriched("sad", 170.0, 0.8, 0.1),
        ];

        let kept = filter_by_threshold(tracks, 165.0);

        let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["fast"]);
    }

    #[test]
    fn boundary_values_are_excluded() {
        assert!(!meets_thresholds(&enriched("t", 165.0, 0.8, 0.6), 165.0));
        assert!(!meets_thresholds(&enriched("e", 170.0, 0.5, 0.6), 165.0));
        assert!(!meets_thresholds(&enriched("v", 170.0, 0.8, 0.3), 165.0));
        assert!(meets_thresholds(&enriched("ok", 165.01, 0.51, 0.31), 165.0));
    }

    #[test]
    fn nan_features_never_pass() {
        assert!(!meets_thresholds(&enriched("n", f64::NAN, 0.8, 0.6), 165.0));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let kept = filter_by_threshold(vec![enriched("slow", 100.0, 0.2, 0.1)], 165.0);
        assert!(kept.is_empty());
    }

    #[test]
    fn selects_first_five_artists_in_order() {
        let seeds = vec![
            Seed::artist("a1", "One"),
            Seed::genre("rock", "Rock"),
            Seed::artist("a2", "Two"),
            Seed::artist("a3", "Three"),
            Seed::artist("a4", "Four"),
            Seed::artist("a5", "Five"),
            Seed::artist("a6", "Six"),
        ];

        assert_eq!(select_seed_artists(&seeds), vec!["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn genre_seeds_are_never_selected() {
        let seeds = vec![Seed::genre("edm", "EDM"), Seed::genre("pop", "Pop")];
        assert!(select_seed_artists(&seeds).is_empty());
    }
}
