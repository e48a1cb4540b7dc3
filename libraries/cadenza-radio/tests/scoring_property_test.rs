//! Property-based tests for similarity scoring and ranking

use cadenza_core::Track;
use cadenza_radio::{rank_similar, similarity_score};
use proptest::prelude::*;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[A-D]{1,2}",                              // title
        prop::option::of("[a-c]"),                 // genre
        "[x-z]?",                                  // artist (may be empty)
        prop::option::of("[p-r]"),                 // album
        prop::option::of(1950i32..2025),           // year
    )
        .prop_map(|(title, genre, artist, album, year)| Track {
            genre,
            album,
            year,
            ..Track::untitled(title, artist)
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: for tracks differing only in year, the year term is
    /// max(0, 20 - 2 * delta) on top of the shared genre, artist and album
    #[test]
    fn year_term_bound(base in 1900i32..2100, delta in 0i32..60) {
        let seed = Track::untitled("Seed", "Artist")
            .with_genre("Genre")
            .with_album("Album")
            .with_year(base);
        let other = Track {
            title: "Other".to_string(),
            year: Some(base + delta),
            ..seed.clone()
        };

        let expected = 120 + (20 - 2 * delta).max(0) as u32;
        prop_assert_eq!(similarity_score(&seed, &other), expected);
        prop_assert_eq!(similarity_score(&other, &seed), expected);
    }

    /// Property: scores never exceed the sum of all terms
    #[test]
    fn score_bounded(a in arbitrary_track(), b in arbitrary_track()) {
        prop_assert!(similarity_score(&a, &b) <= 140);
    }

    /// Property: ranking is limited, excludes the seed title, and is sorted
    #[test]
    fn ranking_is_sorted_and_limited(
        seed in arbitrary_track(),
        catalog in prop::collection::vec(arbitrary_track(), 0..40),
        limit in 0usize..50,
    ) {
        let ranked = rank_similar(&seed, &catalog, limit);

        prop_assert!(ranked.len() <= limit);
        prop_assert!(ranked.iter().all(|t| t.title != seed.title));

        let scores: Vec<u32> = ranked.iter().map(|t| similarity_score(&seed, t)).collect();
        prop_assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        let eligible = catalog.iter().filter(|t| t.title != seed.title).count();
        prop_assert_eq!(ranked.len(), eligible.min(limit));
    }
}
