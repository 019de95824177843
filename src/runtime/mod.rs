//! Binary wiring: settings, logging, library load and one command.

use std::env;
use std::io;
use std::path::Path;

use crate::audio::RodioPlayer;
use crate::console::Console;
use crate::error::Result;
use crate::library::TrackReader;
use crate::organizer::MusicOrganizer;

mod command;
mod logging;
mod settings;

pub use command::{Command, dispatch};


pub fn run() -> Result<()> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let command = Command::parse(env::args().skip(1))?;

    let player = RodioPlayer::new(&settings.player)?;
    let reader = TrackReader::new(settings.library.clone());
    let mut console = Console::new(MusicOrganizer::new(player), io::stdout().lock());

    console.load_library(&reader, Path::new(&settings.library.folder))?;
    dispatch(&mut console, &command)?;

    // Keep the process (and the output stream) alive while a track plays.
    console.organizer().player().wait_until_idle();
    Ok(())
}
