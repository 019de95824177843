use std::path::{Path, PathBuf};

/// Artist/title used when a filename carries no `Artist-Title` split.
pub const UNKNOWN_ARTIST: &str = "unknown";

/// Metadata for one audio file. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    filename: PathBuf,
    artist: String,
    title: String,
}

impl Track {
    pub fn new(
        filename: impl Into<PathBuf>,
        artist: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Build a track from its filename alone.
    ///
    /// A stem of the form `Artist-Title` is split on the first `-`; anything
    /// else keeps the whole stem as the title with an unknown artist.
    pub fn from_filename(filename: impl Into<PathBuf>) -> Self {
        let filename = filename.into();
        let (artist, title) = split_stem(&filename);
        Self {
            filename,
            artist,
            title,
        }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `"artist - title"`
    pub fn details(&self) -> String {
        format!("{} - {}", self.artist, self.title)
    }
}

pub(crate) fn split_stem(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .trim();

    match stem.split_once('-') {
        Some((a, t)) if !a.trim().is_empty() && !t.trim().is_empty() => {
            (a.trim().to_string(), t.trim().to_string())
        }
        _ => (UNKNOWN_ARTIST.to_string(), stem.to_string()),
    }
}
