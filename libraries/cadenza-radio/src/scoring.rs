//! Similarity scoring and ranking
//!
//! Scores are plain sums of attribute matches. Ranking is a stable sort, so
//! ties keep catalog order and the result is fully deterministic.

use cadenza_core::Track;

/// Points for a matching genre
pub const GENRE_POINTS: u32 = 50;

/// Points for a matching artist
pub const ARTIST_POINTS: u32 = 40;

/// Points for a matching album
pub const ALBUM_POINTS: u32 = 30;

/// Points for the same release year; two points are lost per year apart
pub const YEAR_POINTS: u32 = 20;

/// Score how similar `candidate` is to `seed`
///
/// Genre, artist and album are compared as they are, so two tracks that
/// both lack a genre still share it. The year term decays linearly and never
/// goes negative; a missing year on either side contributes nothing.
pub fn similarity_score(seed: &Track, candidate: &Track) -> u32 {
    let mut score = 0;

    if seed.genre == candidate.genre {
        score += GENRE_POINTS;
    }
    if seed.artist == candidate.artist {
        score += ARTIST_POINTS;
    }
    if seed.album == candidate.album {
        score += ALBUM_POINTS;
    }
    if let (Some(a), Some(b)) = (seed.year, candidate.year) {
        score += year_points(a.abs_diff(b));
    }

    score
}

/// `max(0, 20 - 2 * years_apart)`
pub fn year_points(years_apart: u32) -> u32 {
    YEAR_POINTS.saturating_sub(years_apart.saturating_mul(2))
}

/// Rank `catalog` by similarity to `seed` and keep the best `limit`
///
/// Every track whose title equals the seed's title is left out, including
/// the seed itself. Order is non-increasing by score; equal scores keep
/// their catalog order.
pub fn rank_similar(seed: &Track, catalog: &[Track], limit: usize) -> Vec<Track> {
    let mut scored: Vec<(u32, &Track)> = catalog
        .iter()
        .filter(|candidate| candidate.title != seed.title)
        .map(|candidate| (similarity_score(seed, candidate), candidate))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(limit)
        .map(|(_, track)| track.clone())
        .collect()
}
