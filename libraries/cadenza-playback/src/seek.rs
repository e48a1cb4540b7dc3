//! Seek passthrough to the mounted media element
//!
//! The concrete player (audio element, embedded video widget) can be swapped
//! at any time. It installs its seek functions here and the controller calls
//! through this fixed shape without knowing what is mounted.

use std::fmt;

type SeekFn = Box<dyn FnMut(f64) + Send>;

/// Partial set of seek functions offered by a media element
///
/// Missing functions leave the currently bound ones in place.
#[derive(Default)]
pub struct SeekBinding {
    seek_to_seconds: Option<SeekFn>,
    seek_to_fraction: Option<SeekFn>,
}

impl SeekBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_seconds<F>(mut self, seek: F) -> Self
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.seek_to_seconds = Some(Box::new(seek));
        self
    }

    pub fn on_fraction<F>(mut self, seek: F) -> Self
    where
        F: FnMut(f64) + Send + 'static,
    {
        self.seek_to_fraction = Some(Box::new(seek));
        self
    }
}

impl fmt::Debug for SeekBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeekBinding")
            .field("seek_to_seconds", &self.seek_to_seconds.is_some())
            .field("seek_to_fraction", &self.seek_to_fraction.is_some())
            .finish()
    }
}

/// Currently bound seek functions; both are no-ops until something binds
pub struct SeekController {
    seek_to_seconds: SeekFn,
    seek_to_fraction: SeekFn,
}

impl SeekController {
    pub fn new() -> Self {
        Self {
            seek_to_seconds: Box::new(|_| {}),
            seek_to_fraction: Box::new(|_| {}),
        }
    }

    /// Shallow merge: only the functions present in `binding` are replaced
    pub fn bind(&mut self, binding: SeekBinding) {
        if let Some(seek) = binding.seek_to_seconds {
            self.seek_to_seconds = seek;
        }
        if let Some(seek) = binding.seek_to_fraction {
            self.seek_to_fraction = seek;
        }
    }

    pub fn seek_to_seconds(&mut self, seconds: f64) {
        (self.seek_to_seconds)(seconds);
    }

    /// `fraction` is passed through as given; callers clamp to 0.0-1.0
    pub fn seek_to_fraction(&mut self, fraction: f64) {
        (self.seek_to_fraction)(fraction);
    }
}

impl Default for SeekController {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SeekController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeekController").finish_non_exhaustive()
    }
}
