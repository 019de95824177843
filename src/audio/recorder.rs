use std::path::{Path, PathBuf};

use super::types::{Player, PlayerCmd};

/// A [`Player`] that records commands instead of producing sound.
///
/// Part of the public API: use it to drive a `MusicOrganizer` headless (dry
/// runs, tests of code built on this crate) and inspect what would have played.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    commands: Vec<PlayerCmd>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received, oldest first.
    pub fn commands(&self) -> &[PlayerCmd] {
        &self.commands
    }

    /// Files passed to `start_playing`, in order.
    pub fn started(&self) -> Vec<&Path> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PlayerCmd::Start(p) => Some(p.as_path()),
                _ => None,
            })
            .collect()
    }

    /// Files passed to `play_sample`, in order.
    pub fn sampled(&self) -> Vec<&Path> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PlayerCmd::Sample(p) => Some(p.as_path()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Player for RecordingPlayer {
    fn start_playing(&mut self, filename: &Path) {
        self.commands.push(PlayerCmd::Start(PathBuf::from(filename)));
    }

    fn play_sample(&mut self, filename: &Path) {
        self.commands.push(PlayerCmd::Sample(PathBuf::from(filename)));
    }

    fn stop(&mut self) {
        self.commands.push(PlayerCmd::Stop);
    }
}
