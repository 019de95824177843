use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::Path;

use crate::audio::Player;
use crate::library::TrackReader;
use crate::organizer::MusicOrganizer;

use super::render;

/// Drives a [`MusicOrganizer`] and prints what happened.
///
/// Index errors are printed and swallowed; the only error a method returns is
/// a failed write.
pub struct Console<P: Player, W: Write> {
    organizer: MusicOrganizer<P>,
    out: W,
}

impl<P: Player, W: Write> Console<P, W> {
    pub fn new(organizer: MusicOrganizer<P>, out: W) -> Self {
        Self { organizer, out }
    }

    pub fn organizer(&self) -> &MusicOrganizer<P> {
        &self.organizer
    }

    pub fn organizer_mut(&mut self) -> &mut MusicOrganizer<P> {
        &mut self.organizer
    }

    pub fn into_parts(self) -> (MusicOrganizer<P>, W) {
        (self.organizer, self.out)
    }

    /// Read `folder` into the collection and print the startup count.
    pub fn load_library(&mut self, reader: &TrackReader, folder: &Path) -> io::Result<()> {
        self.organizer.read_library(reader, folder);
        writeln!(self.out, "{}", render::library_loaded(self.organizer.count()))?;
        writeln!(self.out)
    }

    pub fn count(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.organizer.count())
    }

    pub fn list_one(&mut self, index: isize) -> io::Result<()> {
        match self.organizer.list_one(index) {
            Ok(track) => writeln!(self.out, "{}", render::track_line(index, track)),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    pub fn list_all(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", render::LISTING_HEADER)?;
        for track in self.organizer.list_all() {
            writeln!(self.out, "{}", track.details())?;
        }
        writeln!(self.out)
    }

    pub fn list_by_artist(&mut self, query: &str) -> io::Result<()> {
        for track in self.organizer.list_by_artist(query) {
            writeln!(self.out, "{}", track.details())?;
        }
        Ok(())
    }

    pub fn remove_track(&mut self, index: isize) -> io::Result<()> {
        match self.organizer.remove_track(index) {
            Ok(_) => Ok(()),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    pub fn play(&mut self, index: isize) -> io::Result<()> {
        match self.organizer.play(index) {
            Ok(track) => writeln!(self.out, "{}", render::now_playing(track)),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    pub fn play_sample(&mut self, index: isize) -> io::Result<()> {
        match self.organizer.play_sample(index) {
            Ok(_) => Ok(()),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    /// Starts track 0 without a now-playing line.
    pub fn play_first(&mut self) -> io::Result<()> {
        self.organizer.play_first();
        Ok(())
    }

    pub fn play_random_track(&mut self) -> io::Result<()> {
        match self.organizer.play_random_track() {
            Some(track) => writeln!(self.out, "{}", render::now_playing(track)),
            None => Ok(()),
        }
    }

    pub fn shuffle_all_tracks(&mut self) -> io::Result<()> {
        if self.organizer.count() == 0 {
            return Ok(());
        }

        writeln!(self.out, "{}", render::SHUFFLE_START_BANNER)?;

        let out = &mut self.out;
        let mut written = Ok(());
        self.organizer.shuffle_all_tracks(|track| {
            written = writeln!(out, "{}", render::now_playing(track))
                .and_then(|()| out.flush());
            if written.is_ok() {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        });
        written?;

        writeln!(self.out, "{}", render::SHUFFLE_END_BANNER)
    }

    pub fn nightmare_mode(&mut self) -> io::Result<()> {
        if self.organizer.nightmare_mode().is_empty() {
            return Ok(());
        }
        writeln!(self.out, "{}", render::NIGHTMARE_BANNER)
    }

    pub fn stop(&mut self) -> io::Result<()> {
        self.organizer.stop();
        Ok(())
    }
}
