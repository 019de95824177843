use std::path::Path;

use lofty::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::{Track, split_stem};

/// Reads a folder of audio files into [`Track`] records.
#[derive(Debug, Clone, Default)]
pub struct TrackReader {
    settings: LibrarySettings,
}

impl TrackReader {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }

    /// Scan `folder` for audio files matching the configured extensions.
    ///
    /// Tag read failures fall back to the filename; a missing folder yields no
    /// tracks. Results are ordered by path.
    pub fn read_tracks(&self, folder: &Path) -> Vec<Track> {
        if !folder.is_dir() {
            warn!(folder = %folder.display(), "library folder not found");
            return Vec::new();
        }

        let settings = &self.settings;
        let mut walker = WalkDir::new(folder).follow_links(settings.follow_links);

        // Non-recursive = only the root directory.
        let depth_cap = if settings.recursive {
            settings.max_depth
        } else {
            Some(1)
        };
        if let Some(d) = depth_cap {
            walker = walker.max_depth(d);
        }

        let mut tracks: Vec<Track> = walker
            .into_iter()
            .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    debug!(%err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.path().is_file() && is_audio_file(e.path(), settings))
            .map(|e| read_track(e.path()))
            .collect();

        tracks.sort_by(|a, b| a.filename().cmp(b.filename()));
        debug!(folder = %folder.display(), count = tracks.len(), "library scanned");
        tracks
    }
}

fn read_track(path: &Path) -> Track {
    let (mut artist, mut title) = split_stem(path);

    match lofty::read_from_path(path) {
        Ok(tagged) => {
            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = tag.title().filter(|v| !v.trim().is_empty()) {
                    title = v.trim().to_string();
                }
                if let Some(v) = tag.artist().filter(|v| !v.trim().is_empty()) {
                    artist = v.trim().to_string();
                }
            }
        }
        Err(err) => debug!(path = %path.display(), %err, "no readable tags, using filename"),
    }

    Track::new(path, artist, title)
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
