use std::io::{self, Write};

use crate::audio::Player;
use crate::console::Console;
use crate::error::{OrganizerError, Result};

/// One-shot command given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Track(isize),
    Artist(String),
    Play(isize),
    Sample(isize),
    First,
    Random,
    Shuffle,
    Nightmare,
    /// Remove, then list what is left.
    Remove(isize),
    Count,
}

impl Command {
    /// Parse `COMMAND [ARG]`. No arguments means `list`.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(name) = args.next() else {
            return Ok(Self::List);
        };
        let arg = args.next();

        let cmd = match name.as_str() {
            "list" => Self::List,
            "track" => Self::Track(index_arg("track", arg)?),
            "artist" => Self::Artist(arg.ok_or(OrganizerError::MissingArgument("artist"))?),
            "play" => Self::Play(index_arg("play", arg)?),
            "sample" => Self::Sample(index_arg("sample", arg)?),
            "first" => Self::First,
            "random" => Self::Random,
            "shuffle" => Self::Shuffle,
            "nightmare" => Self::Nightmare,
            "remove" => Self::Remove(index_arg("remove", arg)?),
            "count" => Self::Count,
            _ => return Err(OrganizerError::UnknownCommand(name)),
        };
        Ok(cmd)
    }
}

fn index_arg(command: &'static str, arg: Option<String>) -> Result<isize> {
    let arg = arg.ok_or(OrganizerError::MissingArgument(command))?;
    arg.trim()
        .parse::<isize>()
        .map_err(|_| OrganizerError::InvalidIndex(arg))
}

pub fn dispatch<P, W>(console: &mut Console<P, W>, cmd: &Command) -> io::Result<()>
where
    P: Player,
    W: Write,
{
    match cmd {
        Command::List => console.list_all(),
        Command::Track(i) => console.list_one(*i),
        Command::Artist(q) => console.list_by_artist(q),
        Command::Play(i) => console.play(*i),
        Command::Sample(i) => console.play_sample(*i),
        Command::First => console.play_first(),
        Command::Random => console.play_random_track(),
        Command::Shuffle => console.shuffle_all_tracks(),
        Command::Nightmare => console.nightmare_mode(),
        Command::Remove(i) => {
            console.remove_track(*i)?;
            console.list_all()
        }
        Command::Count => console.count(),
    }
}
