//! Utilities for opening tracks and creating `rodio` sinks from them.
//!
//! Failures here are returned to the player, which logs them; a bad file never
//! takes the process down.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

use crate::error::{OrganizerError, Result};

/// Open and decode `path`.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>> {
    let file = File::open(path)?;
    Decoder::new(BufReader::new(file)).map_err(|e| OrganizerError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Create a paused `Sink` for `path`, cut to `limit` when given.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    limit: Option<Duration>,
) -> Result<Sink> {
    let source = open_source(path)?;

    let sink = Sink::connect_new(stream.mixer());
    match limit {
        Some(len) => sink.append(source.take_duration(len)),
        None => sink.append(source),
    }
    sink.pause();
    Ok(sink)
}
