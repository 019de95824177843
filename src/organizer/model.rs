use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use rand::rngs::SmallRng;
use rand::seq::{IteratorRandom, SliceRandom};
use tracing::debug;

use crate::audio::Player;
use crate::library::{Track, TrackReader};

use super::index::{IndexError, check_index};

/// Owns the ordered track collection and issues playback commands.
///
/// Every index-taking operation validates first and leaves the collection and
/// the player untouched on failure. Randomized operations work on an owned
/// snapshot, so the live order survives them.
pub struct MusicOrganizer<P: Player> {
    tracks: Vec<Track>,
    player: P,
    rng: SmallRng,
}

impl<P: Player> MusicOrganizer<P> {
    pub fn new(player: P) -> Self {
        Self::with_rng(player, rand::make_rng::<SmallRng>())
    }

    /// Use a caller-provided random source (seed it for reproducible runs).
    pub fn with_rng(player: P, rng: SmallRng) -> Self {
        Self {
            tracks: Vec::new(),
            player,
            rng,
        }
    }

    /// Append everything `reader` finds in `folder`. Returns how many were added.
    pub fn read_library(&mut self, reader: &TrackReader, folder: &Path) -> usize {
        let found = reader.read_tracks(folder);
        let added = found.len();
        self.tracks.extend(found);
        debug!(folder = %folder.display(), added, total = self.tracks.len(), "library loaded");
        added
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn add_file(&mut self, filename: impl Into<PathBuf>) {
        self.tracks.push(Track::from_filename(filename));
    }

    pub fn count(&self) -> usize {
        self.tracks.len()
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn list_one(&self, index: isize) -> Result<&Track, IndexError> {
        let i = check_index(index, self.tracks.len())?;
        Ok(&self.tracks[i])
    }

    pub fn list_all(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks whose artist contains `query` (case-sensitive), in collection order.
    pub fn list_by_artist(&self, query: &str) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| t.artist().contains(query))
            .collect()
    }

    /// Remove and return the track at `index`; later tracks shift down by one.
    pub fn remove_track(&mut self, index: isize) -> Result<Track, IndexError> {
        let i = check_index(index, self.tracks.len())?;
        let removed = self.tracks.remove(i);
        debug!(index = i, file = %removed.filename().display(), "removed track");
        Ok(removed)
    }

    pub fn play(&mut self, index: isize) -> Result<&Track, IndexError> {
        let i = check_index(index, self.tracks.len())?;
        let track = &self.tracks[i];
        self.player.start_playing(track.filename());
        Ok(track)
    }

    pub fn play_sample(&mut self, index: isize) -> Result<&Track, IndexError> {
        let i = check_index(index, self.tracks.len())?;
        let track = &self.tracks[i];
        self.player.play_sample(track.filename());
        Ok(track)
    }

    pub fn play_first(&mut self) -> Option<&Track> {
        let track = self.tracks.first()?;
        self.player.start_playing(track.filename());
        Some(track)
    }

    pub fn play_random_track(&mut self) -> Option<&Track> {
        let i = (0..self.tracks.len()).choose(&mut self.rng)?;
        let track = &self.tracks[i];
        self.player.start_playing(track.filename());
        Some(track)
    }

    /// Sample every track once in a uniformly random order.
    ///
    /// `announce` runs right before each sample; returning `Break` ends the
    /// run without sampling that track. Returns the tracks sampled, in order;
    /// empty (and no player commands) when there are no tracks.
    pub fn shuffle_all_tracks<F>(&mut self, mut announce: F) -> Vec<Track>
    where
        F: FnMut(&Track) -> ControlFlow<()>,
    {
        if self.tracks.is_empty() {
            return Vec::new();
        }

        let mut order = self.tracks.clone();
        order.shuffle(&mut self.rng);
        let mut played = 0;
        for track in &order {
            if announce(track).is_break() {
                debug!(played, "shuffle stopped early");
                break;
            }
            self.player.play_sample(track.filename());
            played += 1;
        }
        order.truncate(played);
        order
    }

    /// Start every track once, back to back, in a uniformly random order.
    ///
    /// Any overlap is up to the player. Returns the start order.
    pub fn nightmare_mode(&mut self) -> Vec<Track> {
        let mut remaining = self.tracks.clone();
        let mut started = Vec::with_capacity(remaining.len());

        while let Some(i) = (0..remaining.len()).choose(&mut self.rng) {
            let track = remaining.swap_remove(i);
            self.player.start_playing(track.filename());
            started.push(track);
        }
        debug!(count = started.len(), "nightmare mode started every track");
        started
    }

    pub fn stop(&mut self) {
        self.player.stop();
    }
}
