use std::path::Path;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use crate::config::PlayerSettings;
use crate::error::{OrganizerError, Result};

use super::sink::create_sink;
use super::types::Player;
use super::voices::Voices;

/// Plays tracks on the default audio output.
///
/// Started tracks keep playing until they end or `stop` is called, so starting
/// several in a row plays them together.
pub struct RodioPlayer {
    stream: OutputStream,
    playing: Voices<Sink>,
    sample_len: Duration,
}

impl RodioPlayer {
    pub fn new(settings: &PlayerSettings) -> Result<Self> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| OrganizerError::OutputStream(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            playing: Voices::default(),
            sample_len: Duration::from_millis(settings.sample_ms.max(1)),
        })
    }

    /// Block until every started track has finished (returns at once when idle).
    pub fn wait_until_idle(&self) {
        for sink in self.playing.iter() {
            sink.sleep_until_end();
        }
    }
}

impl Player for RodioPlayer {
    fn start_playing(&mut self, filename: &Path) {
        match create_sink(&self.stream, filename, None) {
            Ok(sink) => {
                sink.play();
                self.playing.add(sink);
                debug!(file = %filename.display(), voices = self.playing.len(), "start playing");
            }
            Err(err) => warn!(file = %filename.display(), %err, "cannot play track"),
        }
    }

    fn play_sample(&mut self, filename: &Path) {
        self.stop();
        match create_sink(&self.stream, filename, Some(self.sample_len)) {
            Ok(sink) => {
                debug!(file = %filename.display(), len = ?self.sample_len, "play sample");
                sink.play();
                sink.sleep_until_end();
            }
            Err(err) => warn!(file = %filename.display(), %err, "cannot sample track"),
        }
    }

    fn stop(&mut self) {
        let stopped = self.playing.halt_all();
        if stopped > 0 {
            debug!(stopped, "stop");
        }
    }
}
