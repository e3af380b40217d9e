//! Rodio-backed playback of the background-music track.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};

use page_core::audio::AudioSink;

/// The page's audio element. The output stream must outlive the sink, so
/// both are held together.
pub struct RodioMusicSink {
    _stream: OutputStream,
    sink: Sink,
}

impl RodioMusicSink {
    /// `None` when the device or the track is unusable; the music feature is
    /// then silently disabled, matching how the page treats a missing
    /// optional element.
    pub fn open(path: &Path) -> Option<Self> {
        match Self::try_open(path) {
            Ok(sink) => Some(sink),
            Err(err) => {
                tracing::warn!("background music unavailable: {err:#}");
                None
            }
        }
    }

    fn try_open(path: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().context("no audio output device")?;
        let sink = Sink::try_new(&handle).context("failed to create audio sink")?;
        let file = File::open(path)
            .with_context(|| format!("failed to open music track '{}'", path.display()))?;
        let source =
            Decoder::new_looped(BufReader::new(file)).context("failed to decode music track")?;
        sink.append(source);
        sink.pause();
        Ok(Self {
            _stream: stream,
            sink,
        })
    }
}

impl AudioSink for RodioMusicSink {
    fn play(&mut self) -> Result<()> {
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }
}
