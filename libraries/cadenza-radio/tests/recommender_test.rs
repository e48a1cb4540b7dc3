//! Recommender tests
//!
//! Remote-first lookup, fallback scoring and failure propagation, driven
//! through hand-written catalogs.

use async_trait::async_trait;
use cadenza_core::{CadenzaError, CatalogAdapter, StaticCatalog, Track};
use cadenza_radio::{RadioConfig, RadioError, RadioRecommender};
use std::sync::atomic::{AtomicUsize, Ordering};

// ===== Test Catalogs =====

/// Catalog whose similar-track query and full listing can each be broken
struct FakeCatalog {
    tracks: Vec<Track>,
    similar: Option<Vec<Track>>,
    listing_works: bool,
    similar_calls: AtomicUsize,
    listing_calls: AtomicUsize,
}

impl FakeCatalog {
    fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            similar: None,
            listing_works: true,
            similar_calls: AtomicUsize::new(0),
            listing_calls: AtomicUsize::new(0),
        }
    }

    fn with_remote(mut self, similar: Vec<Track>) -> Self {
        self.similar = Some(similar);
        self
    }

    fn broken_listing(mut self) -> Self {
        self.listing_works = false;
        self
    }
}

#[async_trait]
impl CatalogAdapter for FakeCatalog {
    async fn fetch_all(&self) -> cadenza_core::Result<Vec<Track>> {
        self.listing_calls.fetch_add(1, Ordering::SeqCst);
        if self.listing_works {
            Ok(self.tracks.clone())
        } else {
            Err(CadenzaError::network("connection reset"))
        }
    }

    async fn fetch_similar(&self, _title: &str, limit: usize) -> cadenza_core::Result<Vec<Track>> {
        self.similar_calls.fetch_add(1, Ordering::SeqCst);
        match &self.similar {
            Some(tracks) => Ok(tracks.iter().take(limit).cloned().collect()),
            None => Err(CadenzaError::catalog("Server error (500)")),
        }
    }
}

fn song(id: &str, title: &str, artist: &str, genre: &str, year: i32) -> Track {
    Track::new(id, title, artist).with_genre(genre).with_year(year)
}

fn catalog() -> Vec<Track> {
    vec![
        song("1", "Seed", "Miles", "Jazz", 1959),
        song("2", "Far Pop", "Someone", "Pop", 2020),
        song("3", "Same Artist", "Miles", "Fusion", 1970),
        song("4", "Same Genre Close", "Other", "Jazz", 1960),
        song("5", "Same Genre And Artist", "Miles", "Jazz", 1990),
    ]
}

fn titles(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.title.as_str()).collect()
}

// ===== Tests =====

#[tokio::test]
async fn remote_results_are_returned_as_is() {
    let remote = vec![song("9", "Server Pick", "X", "Y", 2000)];
    let fake = FakeCatalog::new(catalog()).with_remote(remote);
    let radio = RadioRecommender::new(fake);

    let similar = radio.similar_tracks("Seed", 10).await.unwrap();

    assert_eq!(titles(&similar), vec!["Server Pick"]);
    assert_eq!(radio.catalog().listing_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fallback_ranks_full_catalog() {
    let radio = RadioRecommender::new(FakeCatalog::new(catalog()));

    let similar = radio.similar_tracks("Seed", 10).await.unwrap();

    // No track has an album, so every candidate shares it (+30):
    // 50+40+30 = 120, 50+30+18 = 98, 40+30 = 70, 30
    assert_eq!(
        titles(&similar),
        vec![
            "Same Genre And Artist",
            "Same Genre Close",
            "Same Artist",
            "Far Pop"
        ]
    );
    assert_eq!(radio.catalog().similar_calls.load(Ordering::SeqCst), 1);
    assert_eq!(radio.catalog().listing_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fallback_respects_limit_and_excludes_seed() {
    let radio = RadioRecommender::new(FakeCatalog::new(catalog()));

    let similar = radio.similar_tracks("Seed", 2).await.unwrap();

    assert_eq!(similar.len(), 2);
    assert!(similar.iter().all(|t| t.title != "Seed"));
}

#[tokio::test]
async fn unknown_seed_yields_empty_station() {
    let radio = RadioRecommender::new(FakeCatalog::new(catalog()));

    let similar = radio.similar_tracks("Not In Catalog", 10).await.unwrap();
    assert!(similar.is_empty());
}

#[tokio::test]
async fn both_paths_failing_is_unavailable() {
    let radio = RadioRecommender::new(FakeCatalog::new(catalog()).broken_listing());

    match radio.similar_tracks("Seed", 10).await {
        Err(RadioError::Unavailable { remote, source }) => {
            assert!(matches!(remote, CadenzaError::Catalog(_)));
            assert!(matches!(source, CadenzaError::Network(_)));
        }
        other => panic!("Expected Unavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn start_radio_requests_station_size() {
    let remote: Vec<Track> = (0..100)
        .map(|i| song(&i.to_string(), &format!("Song {}", i), "A", "B", 2000))
        .collect();
    let config = RadioConfig {
        station_size: 30,
        ..RadioConfig::default()
    };
    let fake = FakeCatalog::new(Vec::new()).with_remote(remote);
    let radio = RadioRecommender::with_config(fake, config);

    let station = radio.start_radio("Song 0").await.unwrap();
    assert_eq!(station.len(), 30);
}

#[tokio::test]
async fn static_catalog_always_scores_locally() {
    let radio = RadioRecommender::new(StaticCatalog::new(catalog()));

    let similar = radio.similar_tracks_default("Seed").await.unwrap();
    assert_eq!(similar[0].title, "Same Genre And Artist");
}
