//! The player seam and the command vocabulary it understands.

use std::path::{Path, PathBuf};

/// Fire-and-forget playback commands.
///
/// Implementations report their own failures (logging); nothing is handed back
/// to the caller.
pub trait Player {
    /// Start full playback of `filename`, replacing whatever was playing.
    fn start_playing(&mut self, filename: &Path);
    /// Play a short preview of `filename`.
    fn play_sample(&mut self, filename: &Path);
    /// Stop current playback. No-op when idle.
    fn stop(&mut self);
}

impl<P: Player + ?Sized> Player for &mut P {
    fn start_playing(&mut self, filename: &Path) {
        (**self).start_playing(filename)
    }

    fn play_sample(&mut self, filename: &Path) {
        (**self).play_sample(filename)
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerCmd {
    /// Full playback of the given file.
    Start(PathBuf),
    /// Sample preview of the given file.
    Sample(PathBuf),
    Stop,
}
