//! Playback collaborators.
//!
//! The organizer only issues commands through [`Player`]; `RodioPlayer` is the
//! real output; `RecordingPlayer` is a supported stand-in that logs commands
//! instead of producing sound, for embedding the organizer without a device
//! and for tests.

mod player;
mod recorder;
mod sink;
mod types;
mod voices;

pub use player::RodioPlayer;
pub use recorder::RecordingPlayer;
pub use types::{Player, PlayerCmd};
