//! Playback controller - core orchestration
//!
//! Owns the current track, transport state, the normal queue, history and
//! the optional radio session, and decides what plays next. All operations
//! are synchronous and never fail: "nothing to play" is a silent no-op.

use crate::{
    events::{EventBus, PlaybackEvent, PlaybackObserver, SubscriptionId},
    history::History,
    progress::Progress,
    queue::{next_index, previous_index, AtEnd, PlayQueue},
    recent::RecentTracks,
    seek::{SeekBinding, SeekController},
    shuffle::shuffle_tracks,
    types::{LoopMode, PlaybackConfig, PlaybackSnapshot, ProgressUpdate, RadioSession},
    volume::Volume,
};
use cadenza_core::{identity, same_track, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Outcome of next-track resolution
enum NextStep {
    Play(Track),
    /// Sequential end of the radio station
    RadioFinished,
    Nothing,
}

/// Playback controller
///
/// Created once per session and driven from a single logical thread: UI
/// gestures call the transport methods, the mounted media element reports
/// progress, duration and "ended" back through `set_progress`,
/// `set_duration` and `on_media_ended`.
#[derive(Debug)]
pub struct PlaybackController {
    // Transport
    current: Option<Track>,
    is_playing: bool,
    progress: Progress,

    // Navigation
    queue: PlayQueue,
    history: History,
    radio: Option<RadioSession>,
    shuffle: bool,
    loop_mode: LoopMode,
    rng: StdRng,

    volume: Volume,
    recent: RecentTracks,
    seek: SeekController,
    events: EventBus,
}

impl PlaybackController {
    /// Create new playback controller
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a controller whose shuffle choices are reproducible
    pub fn with_seed(config: PlaybackConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PlaybackConfig, rng: StdRng) -> Self {
        Self {
            current: None,
            is_playing: false,
            progress: Progress::default(),
            queue: PlayQueue::new(),
            history: History::new(config.history_size),
            radio: None,
            shuffle: config.shuffle,
            loop_mode: config.loop_mode,
            rng,
            volume: Volume::new(config.volume),
            recent: RecentTracks::new(config.recent_limit),
            seek: SeekController::new(),
            events: EventBus::default(),
        }
    }

    // ===== Transport =====

    /// Play `track`
    ///
    /// With `new_queue`, the queue is replaced and history cleared: a fresh
    /// playback context. That also ends radio mode. Re-playing the current
    /// track resumes it without touching progress.
    pub fn play(&mut self, track: Track, new_queue: Option<Vec<Track>>) {
        if let Some(tracks) = new_queue {
            self.exit_radio_mode();
            self.queue.replace(tracks);
            self.history.clear();
            self.events.emit(PlaybackEvent::QueueChanged {
                length: self.queue.len(),
            });
        }

        self.load(track);
        self.set_playing(true);
    }

    /// Pause playback (idempotent)
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Apply a progress report from the media element
    pub fn set_progress(&mut self, update: ProgressUpdate) {
        if self.progress.apply(update) {
            self.events.emit(PlaybackEvent::ProgressUpdated {
                played_seconds: self.progress.played_seconds(),
                played_fraction: self.progress.fraction(),
            });
        }
    }

    /// Record the duration once the media element knows it
    pub fn set_duration(&mut self, seconds: f64) {
        if self.progress.set_duration(seconds) {
            self.events.emit(PlaybackEvent::DurationChanged {
                duration_seconds: seconds,
            });
        }
    }

    /// Skip to the next track
    ///
    /// Returns `true` if a track was resolved. Reaching the sequential end of
    /// a radio station ends radio mode and stops the transport.
    pub fn play_next(&mut self) -> bool {
        match self.resolve_next() {
            NextStep::Play(track) => {
                if let Some(previous) = &self.current {
                    self.history.push(previous.clone());
                }
                self.load_or_restart(track);
                self.set_playing(true);
                true
            }
            NextStep::RadioFinished => {
                debug!("Radio station finished");
                self.exit_radio_mode();
                self.set_playing(false);
                false
            }
            NextStep::Nothing => {
                debug!("No next track");
                false
            }
        }
    }

    /// Go back to the previous track
    ///
    /// History wins; only when it is empty does this step back one index in
    /// the active list (radio station or queue). No wraparound.
    pub fn play_previous(&mut self) -> bool {
        let track = match self.history.pop() {
            Some(track) => track,
            None => {
                let list = self.active_list();
                let current = self
                    .current
                    .as_ref()
                    .and_then(|current| identity::position_of(list, current));
                match previous_index(current) {
                    Some(index) => list[index].clone(),
                    None => {
                        debug!("No previous track");
                        return false;
                    }
                }
            }
        };

        self.load_or_restart(track);
        self.set_playing(true);
        true
    }

    /// Media "ended" handler
    ///
    /// Repeat-one rewinds and keeps playing the current track; anything
    /// else advances, and the transport goes idle when nothing follows.
    pub fn on_media_ended(&mut self) {
        if self.loop_mode == LoopMode::One {
            if let Some(track) = self.current.clone() {
                self.restart(track);
                self.set_playing(true);
                return;
            }
        }

        if !self.play_next() {
            self.set_playing(false);
        }
    }

    // ===== Modes =====

    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    /// Only affects later selections; the queue is never reordered
    pub fn set_shuffle(&mut self, shuffle: bool) {
        if self.shuffle != shuffle {
            self.shuffle = shuffle;
            self.emit_mode_changed();
        }
    }

    /// Cycle `off → one → all → off`
    pub fn toggle_loop(&mut self) {
        self.set_loop_mode(self.loop_mode.cycle());
    }

    pub fn set_loop_mode(&mut self, loop_mode: LoopMode) {
        if self.loop_mode != loop_mode {
            self.loop_mode = loop_mode;
            self.emit_mode_changed();
        }
    }

    // ===== Queue =====

    /// Append to the normal queue (radio mode is unaffected)
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.events.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Replace the normal queue without touching the current track
    pub fn set_play_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        self.events.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    // ===== Radio =====

    /// Start radio mode from `seed` with a ranked list of candidates
    ///
    /// Candidates are de-duplicated and the seed removed; the station is
    /// shuffled once if shuffle is on. History is cleared and the first
    /// station track starts playing. Returns `false` (and changes nothing)
    /// when no candidate is left.
    pub fn start_radio_mode(&mut self, seed: Track, candidates: Vec<Track>) -> bool {
        let mut station: Vec<Track> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if same_track(&candidate, &seed)
                || station.iter().any(|kept| same_track(kept, &candidate))
            {
                continue;
            }
            station.push(candidate);
        }

        if self.shuffle {
            shuffle_tracks(&mut station, &mut self.rng);
        }

        let Some(first) = station.first().cloned() else {
            debug!(seed = %seed.title, "Radio station is empty, not starting");
            return false;
        };

        debug!(seed = %seed.title, length = station.len(), "Starting radio");
        let length = station.len();
        self.history.clear();
        self.radio = Some(RadioSession::new(seed.clone(), station));
        self.events.emit(PlaybackEvent::RadioStarted { seed, length });

        self.load(first);
        self.set_playing(true);
        true
    }

    /// Leave radio mode; playback and the current track are untouched
    pub fn exit_radio_mode(&mut self) {
        if self.radio.take().is_some() {
            debug!("Exiting radio mode");
            self.events.emit(PlaybackEvent::RadioEnded);
        }
    }

    // ===== Volume =====

    /// Set volume level (0.0-1.0, clamped)
    pub fn set_volume(&mut self, level: f32) {
        let before = self.volume.level();
        self.volume.set_level(level);
        if self.volume.level() != before {
            self.emit_volume_changed();
        }
    }

    pub fn mute(&mut self) {
        if !self.volume.is_muted() {
            self.volume.mute();
            self.emit_volume_changed();
        }
    }

    pub fn unmute(&mut self) {
        if self.volume.is_muted() {
            self.volume.unmute();
            self.emit_volume_changed();
        }
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Level the media element should apply (0.0 while muted)
    pub fn effective_volume(&self) -> f32 {
        self.volume.effective()
    }

    // ===== Seek =====

    /// Install seek functions from the mounted media element (shallow merge)
    pub fn set_controller(&mut self, binding: SeekBinding) {
        self.seek.bind(binding);
    }

    pub fn seek_to_seconds(&mut self, seconds: f64) {
        self.seek.seek_to_seconds(seconds);
    }

    /// `fraction` must already be clamped to 0.0-1.0
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        self.seek.seek_to_fraction(fraction);
    }

    /// Upper bound for a seek control: `max(1, duration)`
    pub fn progress_max(&self) -> f64 {
        self.progress.max()
    }

    // ===== Observers =====

    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: PlaybackObserver + 'static,
    {
        self.events.subscribe(Box::new(observer))
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain()
    }

    // ===== State =====

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn played_seconds(&self) -> f64 {
        self.progress.played_seconds()
    }

    /// `0.0` until the duration is known
    pub fn duration_seconds(&self) -> f64 {
        self.progress.duration_seconds()
    }

    /// Derived from seconds and duration, 0.0-1.0
    pub fn played_fraction(&self) -> f64 {
        self.progress.fraction()
    }

    /// Normal queue
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Playback history (oldest first)
    pub fn history(&self) -> Vec<&Track> {
        self.history.iter().collect()
    }

    pub fn radio(&self) -> Option<&RadioSession> {
        self.radio.as_ref()
    }

    pub fn is_radio_active(&self) -> bool {
        self.radio.is_some()
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    /// Recently played tracks (most recent first)
    pub fn recently_played(&self) -> Vec<&Track> {
        self.recent.iter().collect()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current: self.current.clone(),
            is_playing: self.is_playing,
            played_seconds: self.progress.played_seconds(),
            duration_seconds: self.progress.duration_seconds(),
            played_fraction: self.progress.fraction(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            shuffle: self.shuffle,
            loop_mode: self.loop_mode,
            radio_active: self.radio.is_some(),
        }
    }

    // ===== Internal =====

    /// List that next/previous resolve against
    fn active_list(&self) -> &[Track] {
        match &self.radio {
            Some(radio) => radio.queue(),
            None => self.queue.tracks(),
        }
    }

    fn resolve_next(&mut self) -> NextStep {
        let (list, at_end) = match &self.radio {
            Some(radio) => (radio.queue(), AtEnd::Stop),
            None if self.loop_mode == LoopMode::All => (self.queue.tracks(), AtEnd::Wrap),
            None => (self.queue.tracks(), AtEnd::Stop),
        };
        let current = self
            .current
            .as_ref()
            .and_then(|current| identity::position_of(list, current));

        match next_index(list.len(), current, self.shuffle, at_end, &mut self.rng) {
            Some(index) => NextStep::Play(list[index].clone()),
            None if self.radio.is_some() => NextStep::RadioFinished,
            None => NextStep::Nothing,
        }
    }

    /// Make `track` current; progress resets only when identity changes
    fn load(&mut self, track: Track) {
        let unchanged = self
            .current
            .as_ref()
            .is_some_and(|current| same_track(current, &track));
        if unchanged {
            self.current = Some(track);
            return;
        }

        debug!(title = %track.title, artist = %track.artist, "Track changed");
        self.progress.reset();
        self.recent.record(&track);
        let previous = self.current.replace(track.clone());
        self.events.emit(PlaybackEvent::TrackChanged { track, previous });
    }

    /// Like `load`, but navigating onto the current track replays it
    fn load_or_restart(&mut self, track: Track) {
        let unchanged = self
            .current
            .as_ref()
            .is_some_and(|current| same_track(current, &track));
        if unchanged {
            self.restart(track);
        } else {
            self.load(track);
        }
    }

    fn restart(&mut self, track: Track) {
        debug!(title = %track.title, "Restarting track");
        self.seek.seek_to_seconds(0.0);
        self.progress.rewind();
        self.current = Some(track.clone());
        self.events.emit(PlaybackEvent::TrackRestarted { track });
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.events.emit(PlaybackEvent::StateChanged { is_playing });
        }
    }

    fn emit_mode_changed(&mut self) {
        self.events.emit(PlaybackEvent::ModeChanged {
            shuffle: self.shuffle,
            loop_mode: self.loop_mode,
        });
    }

    fn emit_volume_changed(&mut self) {
        self.events.emit(PlaybackEvent::VolumeChanged {
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
        });
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
