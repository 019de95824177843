//! Message templates. Pure string builders, no I/O.

use crate::library::Track;

pub const LISTING_HEADER: &str = "Track listing: ";

pub const SHUFFLE_START_BANNER: &str = "\n>>>>>>CRITICAL PAUSE BUTTON FAILURE!<<<<<<\n\
                                        >>PRESS CTRL-C TO STOP PLAYING MUSIC<<\n";

pub const SHUFFLE_END_BANNER: &str = "\n>>>>PAUSE BUTTON BACK ONLINE<<<<";

pub const NIGHTMARE_BANNER: &str = "\nNow playing : ERROR\n\n\
                                    >>>>>>>>>I HEARD YOU LIKE SONGS<<<<<<<<<\n\
                                    >>>>SO I PUT SONGS INSIDE YOUR SONGS<<<<\n\
                                    >>>>>>>>>>>>>>>>>>ENJOY<<<<<<<<<<<<<<<<<\n\n\
                                    Press Ctrl-C at any time to exit Nightmare Mode\n";

pub fn library_loaded(count: usize) -> String {
    format!("Music library loaded. {count} tracks.")
}

pub fn now_playing(track: &Track) -> String {
    format!("Now playing: {} - {}", track.artist(), track.title())
}

pub fn track_line(index: isize, track: &Track) -> String {
    format!("Track {index}: {}", track.details())
}
