//! Background-music playback state.

use tracing::warn;

/// Output seam for the host's audio element.
pub trait AudioSink {
    fn play(&mut self) -> anyhow::Result<()>;
    fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    Playing,
    #[default]
    Paused,
}

/// Play/pause state of the background music, mirrored by the host into the
/// toggle button's label.
#[derive(Debug, Default)]
pub struct MusicController {
    state: PlaybackState,
}

impl MusicController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Autoplay attempt at page-ready. A policy-style rejection leaves the
    /// state paused with no user-visible error.
    pub fn try_autoplay(&mut self, sink: &mut impl AudioSink) {
        if sink.play().is_ok() {
            self.state = PlaybackState::Playing;
        }
    }

    /// Click handler for the toggle button. A playback failure is logged,
    /// never surfaced, and the state stays paused.
    pub fn toggle(&mut self, sink: &mut impl AudioSink) {
        match self.state {
            PlaybackState::Playing => {
                sink.pause();
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => match sink.play() {
                Ok(()) => self.state = PlaybackState::Playing,
                Err(err) => warn!("background music playback failed: {err}"),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/audio_tests.rs"]
mod tests;
