//! Shuffle helpers
//!
//! Next-track shuffle picks a random index on each transition; the list
//! itself is never reordered. Radio stations are the one exception: the
//! whole station is shuffled once when it is activated.

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a uniformly random index in `0..len`, skipping `exclude`
///
/// Returns `None` when no other index exists.
pub(crate) fn random_index_excluding<R: Rng + ?Sized>(
    len: usize,
    exclude: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    match exclude {
        Some(skip) if skip < len => {
            if len < 2 {
                return None;
            }
            // Draw from len - 1 slots and step over the excluded one
            let pick = rng.gen_range(0..len - 1);
            Some(if pick >= skip { pick + 1 } else { pick })
        }
        _ if len == 0 => None,
        _ => Some(rng.gen_range(0..len)),
    }
}

/// Fisher-Yates shuffle of a whole track list
pub(crate) fn shuffle_tracks<T, R: Rng + ?Sized>(tracks: &mut [T], rng: &mut R) {
    tracks.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn excluded_index_is_never_picked() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let pick = random_index_excluding(5, Some(3), &mut rng).unwrap();
            assert_ne!(pick, 3);
        }
    }

    #[test]
    fn every_other_index_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<usize> = (0..500)
            .filter_map(|_| random_index_excluding(5, Some(0), &mut rng))
            .collect();
        assert_eq!(seen, [1, 2, 3, 4].into_iter().collect());
    }

    #[test]
    fn no_alternative_means_none() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(random_index_excluding(1, Some(0), &mut rng), None);
        assert_eq!(random_index_excluding(0, None, &mut rng), None);
    }

    #[test]
    fn out_of_range_exclusion_is_ignored() {
        let mut rng = StdRng::seed_from_u64(42);
        let pick = random_index_excluding(1, Some(9), &mut rng);
        assert_eq!(pick, Some(0));
    }

    #[test]
    fn shuffle_preserves_all_items() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle_tracks(&mut items, &mut rng);

        let set: HashSet<u32> = items.iter().copied().collect();
        assert_eq!(set.len(), 20);
    }
}
