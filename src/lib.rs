//! A small music library organizer.
//!
//! Tracks are read from a folder into an ordered collection; the
//! [`organizer::MusicOrganizer`] picks what to play (by index, at random,
//! shuffled samples, or everything at once) and hands filenames to an
//! [`audio::Player`].

pub mod audio;
pub mod config;
pub mod console;
pub mod error;
pub mod library;
pub mod organizer;
pub mod runtime;
