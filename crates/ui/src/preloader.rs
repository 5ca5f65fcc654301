//! Loading overlay shown until the page is ready.

/// Seconds between the load signal and removal.
pub const PRELOADER_FADE: f32 = 0.5;

/// Lifecycle of the loading overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Fully opaque, waiting for load.
    Loading,
    /// Fading out.
    Fading,
    /// Gone for good.
    Removed,
}

/// Preloader driven by page time in seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preloader {
    loaded_at: Option<f32>,
}

impl Preloader {
    /// Create a preloader that is still loading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report that the page finished loading at `now`. Later calls are ignored.
    pub fn loaded(&mut self, now: f32) {
        if self.loaded_at.is_none() {
            self.loaded_at = Some(now);
        }
    }

    /// Phase at `now`.
    pub fn phase(&self, now: f32) -> PreloaderPhase {
        match self.loaded_at {
            None => PreloaderPhase::Loading,
            Some(at) if now - at >= PRELOADER_FADE => PreloaderPhase::Removed,
            Some(_) => PreloaderPhase::Fading,
        }
    }

    /// Overlay opacity at `now`, from 1 down to 0 across the fade.
    pub fn opacity(&self, now: f32) -> f32 {
        match self.loaded_at {
            None => 1.0,
            Some(at) => (1.0 - (now - at) / PRELOADER_FADE).clamp(0.0, 1.0),
        }
    }

    /// Whether the overlay should still be drawn.
    pub fn is_visible(&self, now: f32) -> bool {
        self.phase(now) != PreloaderPhase::Removed
    }
}
