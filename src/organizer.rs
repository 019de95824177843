//! The track collection and its playback policies.
//!
//! `MusicOrganizer` decides *what* to play and hands filenames to a
//! [`crate::audio::Player`]; it never prints. Rendering lives in
//! [`crate::console`].

mod index;
mod model;

pub use index::IndexError;
pub use model::MusicOrganizer;
