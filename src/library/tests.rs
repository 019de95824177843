use super::{Track, UNKNOWN_ARTIST};
use std::path::Path;

#[test]
fn details_joins_artist_and_title() {
    let t = Track::new("a.mp3", "Daft Punk", "Around the World");
    assert_eq!(t.details(), "Daft Punk - Around the World");
    assert_eq!(t.filename(), Path::new("a.mp3"));
}

#[test]
fn from_filename_splits_artist_title_stem() {
    let t = Track::from_filename("../audio/BlindLemonJefferson-matchBoxBlues.mp3");
    assert_eq!(t.artist(), "BlindLemonJefferson");
    assert_eq!(t.title(), "matchBoxBlues");
    assert_eq!(t.filename(), Path::new("../audio/BlindLemonJefferson-matchBoxBlues.mp3"));
}

#[test]
fn from_filename_splits_on_first_dash_only() {
    let t = Track::from_filename("Queen - We Will Rock You - Live.mp3");
    assert_eq!(t.artist(), "Queen");
    assert_eq!(t.title(), "We Will Rock You - Live");
}

#[test]
fn from_filename_without_dash_has_unknown_artist() {
    let t = Track::from_filename("/music/interlude.mp3");
    assert_eq!(t.artist(), UNKNOWN_ARTIST);
    assert_eq!(t.title(), "interlude");

    let t = Track::from_filename("-dangling.mp3");
    assert_eq!(t.artist(), UNKNOWN_ARTIST);
    assert_eq!(t.title(), "-dangling");
}
