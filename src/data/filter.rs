use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::model::{Track, TrackDataset};

// ---------------------------------------------------------------------------
// Read-only row predicates over the dataset
// ---------------------------------------------------------------------------

/// Tracks whose genre is in `genres`, in file order.
pub fn in_genres<'a>(
    dataset: &'a TrackDataset,
    genres: &'a BTreeSet<String>,
) -> impl Iterator<Item = &'a Track> + 'a {
    dataset
        .tracks()
        .iter()
        .filter(move |t| genres.contains(&t.genre))
}

/// Tracks by exactly `artist`, in file order.
pub fn by_artist<'a>(
    dataset: &'a TrackDataset,
    artist: &'a str,
) -> impl Iterator<Item = &'a Track> + 'a {
    dataset.tracks().iter().filter(move |t| t.artist == artist)
}

/// Tracks by `artist` whose name is in `names`, in file order.
pub fn by_artist_and_names<'a>(
    dataset: &'a TrackDataset,
    artist: &'a str,
    names: &'a BTreeSet<String>,
) -> impl Iterator<Item = &'a Track> + 'a {
    by_artist(dataset, artist).filter(move |t| names.contains(&t.track_name))
}

/// Uniform sample of up to `amount` tracks from `genre`, without replacement.
/// A genre with fewer tracks yields all of them; an unknown genre yields none.
pub fn sample_genre<'a, R: Rng + ?Sized>(
    dataset: &'a TrackDataset,
    genre: &str,
    amount: usize,
    rng: &mut R,
) -> Vec<&'a Track> {
    dataset
        .tracks_by_genre(genre)
        .choose_multiple(rng, amount)
        .map(|&i| &dataset.tracks()[i])
        .collect()
}

/// Distinct values of `key` in first-seen order.
pub fn distinct_in_order<'a, I, F>(tracks: I, key: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a Track>,
    F: Fn(&'a Track) -> &'a str,
{
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for track in tracks {
        let value = key(track);
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::data::model::tests::track;

    fn dataset() -> TrackDataset {
        TrackDataset::from_tracks(vec![
            track("A", "a1", "rock", 10, 0.1),
            track("B", "b1", "pop", 20, 0.2),
            track("A", "a2", "pop", 30, 0.3),
            track("A", "a1", "pop", 40, 0.4),
            track("C", "c1", "jazz", 50, 0.5),
        ])
    }

    #[test]
    fn genre_filter_keeps_file_order() {
        let ds = dataset();
        let genres: BTreeSet<String> = ["pop".to_string(), "jazz".to_string()].into();
        let names: Vec<_> = in_genres(&ds, &genres).map(|t| t.track_name.as_str()).collect();
        assert_eq!(names, ["b1", "a2", "a1", "c1"]);
    }

    #[test]
    fn artist_filter_is_exact_match() {
        let ds = dataset();
        assert_eq!(by_artist(&ds, "A").count(), 3);
        assert_eq!(by_artist(&ds, "a").count(), 0);
        let names: BTreeSet<String> = ["a1".to_string()].into();
        let pops: Vec<u32> = by_artist_and_names(&ds, "A", &names).map(|t| t.popularity).collect();
        assert_eq!(pops, [10, 40]);
    }

    #[test]
    fn sample_is_capped_and_genre_pure() {
        let ds = dataset();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = sample_genre(&ds, "pop", 2, &mut rng);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|t| t.genre == "pop"));
        assert_eq!(sample_genre(&ds, "pop", 10, &mut rng).len(), 3);
        assert!(sample_genre(&ds, "metal", 5, &mut rng).is_empty());
    }

    fn large_genre() -> TrackDataset {
        TrackDataset::from_tracks(
            (0..20)
                .map(|i| track("D", &format!("d{i}"), "disco", i, 0.1))
                .collect(),
        )
    }

    fn drawn_names(ds: &TrackDataset, seed: u64) -> BTreeSet<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        sample_genre(ds, "disco", 5, &mut rng)
            .into_iter()
            .map(|t| t.track_name.clone())
            .collect()
    }

    #[test]
    fn different_seeds_draw_different_tracks() {
        let ds = large_genre();
        let draws: BTreeSet<BTreeSet<String>> =
            (0..20).map(|seed| drawn_names(&ds, seed)).collect();
        assert!(draws.len() > 1, "every seed drew the same five tracks");
        assert!(draws.iter().all(|d| d.len() == 5));
    }

    #[test]
    fn sample_is_not_the_file_order_prefix() {
        let ds = large_genre();
        let prefix: BTreeSet<String> = (0..5).map(|i| format!("d{i}")).collect();
        let off_prefix = (0..20)
            .map(|seed| drawn_names(&ds, seed))
            .filter(|d| *d != prefix)
            .count();
        assert!(off_prefix > 0, "sampling always returned the first rows");
        // Rows past the first five are reachable too.
        let seen: BTreeSet<String> = (0..20).flat_map(|seed| drawn_names(&ds, seed)).collect();
        assert!(seen.difference(&prefix).next().is_some());
    }

    #[test]
    fn distinct_in_order_dedupes() {
        let ds = dataset();
        let names = distinct_in_order(by_artist(&ds, "A"), |t| t.track_name.as_str());
        assert_eq!(names, ["a1", "a2"]);
    }
}
