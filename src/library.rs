//! Track records and the file-system reader that produces them.

mod model;
mod scan;

pub use model::{Track, UNKNOWN_ARTIST};
pub use scan::TrackReader;

#[cfg(test)]
mod tests;
