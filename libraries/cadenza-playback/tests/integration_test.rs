//! Integration tests for the playback controller
//!
//! Real listening sessions driven through the public API only.

use cadenza_core::Track;
use cadenza_playback::{
    LoopMode, PlaybackConfig, PlaybackController, PlaybackEvent, ProgressUpdate, SeekBinding,
};
use std::sync::{Arc, Mutex};

// ===== Test Helpers =====

fn create_test_track(id: &str) -> Track {
    Track::new(id, format!("Track {}", id), "Test Artist")
        .with_album("Test Album")
        .with_media_url(format!("https://cdn.example.com/{}.mp3", id))
}

fn abc() -> Vec<Track> {
    vec![
        create_test_track("A"),
        create_test_track("B"),
        create_test_track("C"),
    ]
}

fn title(controller: &PlaybackController) -> Option<String> {
    controller.current().map(|t| t.title.clone())
}

fn history_titles(controller: &PlaybackController) -> Vec<String> {
    controller.history().iter().map(|t| t.title.clone()).collect()
}

// ===== Scenarios =====

#[test]
fn sequential_session_stops_at_queue_end() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let tracks = abc();

    controller.play(tracks[0].clone(), Some(tracks));

    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track B"));
    assert_eq!(history_titles(&controller), vec!["Track A"]);

    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track C"));
    assert_eq!(history_titles(&controller), vec!["Track A", "Track B"]);

    assert!(!controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track C"));
    assert!(controller.is_playing());
}

#[test]
fn loop_all_wraps_to_first_track() {
    let config = PlaybackConfig {
        loop_mode: LoopMode::All,
        ..PlaybackConfig::default()
    };
    let mut controller = PlaybackController::new(config);
    let tracks = abc();

    controller.play(tracks[2].clone(), Some(tracks));
    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track A"));
}

#[test]
fn loop_off_end_is_a_no_op() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let tracks = abc();
    controller.play(tracks[2].clone(), Some(tracks));
    controller.pause();

    assert!(!controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track C"));
    // Transport state is left alone
    assert!(!controller.is_playing());
}

#[test]
fn history_stack_law() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let tracks = abc();
    controller.set_play_queue(tracks.clone());

    controller.play(tracks[0].clone(), None);
    controller.play(tracks[1].clone(), None);
    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track C"));

    assert!(controller.play_previous());
    assert_eq!(title(&controller).as_deref(), Some("Track B"));

    // History is exhausted; B has a predecessor in the queue
    assert!(controller.play_previous());
    assert_eq!(title(&controller).as_deref(), Some("Track A"));

    assert!(!controller.play_previous());
    assert_eq!(title(&controller).as_deref(), Some("Track A"));
}

#[test]
fn pause_is_idempotent() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.play(create_test_track("A"), None);

    controller.pause();
    let once = controller.snapshot();
    controller.pause();
    let twice = controller.snapshot();

    assert_eq!(once, twice);
}

#[test]
fn empty_queue_operations_are_silent() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());

    assert!(!controller.play_next());
    assert!(!controller.play_previous());
    controller.on_media_ended();
    controller.pause();

    assert!(controller.current().is_none());
    assert!(!controller.is_playing());
}

#[test]
fn track_without_media_url_is_accepted() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let track = Track::new("x", "Silent", "Nobody");

    controller.play(track, None);
    assert_eq!(title(&controller).as_deref(), Some("Silent"));
    assert!(controller.is_playing());
}

#[test]
fn progress_derivation() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.play(create_test_track("A"), None);

    controller.set_duration(120.0);
    controller.set_progress(ProgressUpdate::seconds(30.0));
    assert_eq!(controller.played_fraction(), 0.25);
    assert_eq!(controller.progress_max(), 120.0);

    controller.set_progress(ProgressUpdate::fraction(0.5));
    assert_eq!(controller.played_seconds(), 60.0);
}

#[test]
fn progress_updates_never_change_current() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.play(create_test_track("A"), None);
    controller.set_progress(ProgressUpdate {
        played_seconds: Some(12.0),
        played_fraction: Some(0.9),
    });

    assert_eq!(title(&controller).as_deref(), Some("Track A"));
    assert_eq!(controller.played_seconds(), 12.0);
}

#[test]
fn repeat_one_seeks_bound_element_to_start() {
    let seeks = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seeks);

    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.set_controller(
        SeekBinding::new().on_seconds(move |seconds| sink.lock().unwrap().push(seconds)),
    );
    controller.play(create_test_track("A"), None);
    controller.set_loop_mode(LoopMode::One);

    controller.on_media_ended();
    controller.on_media_ended();

    assert_eq!(*seeks.lock().unwrap(), vec![0.0, 0.0]);
    assert!(controller.is_playing());
    assert_eq!(title(&controller).as_deref(), Some("Track A"));
}

#[test]
fn user_seek_calls_through_binding() {
    let seeks = Arc::new(Mutex::new(Vec::new()));
    let seconds_sink = Arc::clone(&seeks);
    let fraction_sink = Arc::clone(&seeks);

    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.set_controller(
        SeekBinding::new()
            .on_seconds(move |s| seconds_sink.lock().unwrap().push(format!("s:{}", s))),
    );
    controller.set_controller(
        SeekBinding::new()
            .on_fraction(move |f| fraction_sink.lock().unwrap().push(format!("f:{}", f))),
    );

    controller.seek_to_seconds(42.0);
    controller.seek_to_fraction(0.5);

    assert_eq!(*seeks.lock().unwrap(), vec!["s:42", "f:0.5"]);
}

#[test]
fn observer_sees_track_changes_in_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let id = controller.subscribe(move |event: &PlaybackEvent| {
        if let PlaybackEvent::TrackChanged { track, previous } = event {
            sink.lock().unwrap().push((
                track.title.clone(),
                previous.as_ref().map(|t| t.title.clone()),
            ));
        }
    });

    let tracks = abc();
    controller.play(tracks[0].clone(), Some(tracks));
    controller.play_next();
    assert!(controller.unsubscribe(id));
    controller.play_next();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            ("Track A".to_string(), None),
            ("Track B".to_string(), Some("Track A".to_string())),
        ]
    );
}

#[test]
fn set_play_queue_keeps_current_track() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    controller.play(create_test_track("X"), None);
    controller.pause();

    controller.set_play_queue(abc());

    assert_eq!(title(&controller).as_deref(), Some("Track X"));
    assert!(!controller.is_playing());
    assert_eq!(controller.queue().len(), 3);

    // Current is not in the queue: next starts from the front
    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Track A"));
}

#[test]
fn tracks_without_ids_match_by_title() {
    let mut controller = PlaybackController::new(PlaybackConfig::default());
    let tracks = vec![
        Track::untitled("One", "Band"),
        Track::untitled("Two", "Band"),
    ];

    controller.play(Track::untitled("One", "Band"), Some(tracks));
    assert!(controller.play_next());
    assert_eq!(title(&controller).as_deref(), Some("Two"));
}

#[test]
fn history_is_bounded_by_config() {
    let config = PlaybackConfig {
        history_size: 2,
        loop_mode: LoopMode::All,
        ..PlaybackConfig::default()
    };
    let mut controller = PlaybackController::new(config);
    let tracks = abc();
    controller.play(tracks[0].clone(), Some(tracks));

    for _ in 0..5 {
        controller.play_next();
    }
    assert_eq!(controller.history().len(), 2);
}
