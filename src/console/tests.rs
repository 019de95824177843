use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::{Console, render};
use crate::audio::{PlayerCmd, RecordingPlayer};
use crate::library::{Track, TrackReader};
use crate::organizer::MusicOrganizer;

fn console(tracks: &[(&str, &str, &str)]) -> Console<RecordingPlayer, Vec<u8>> {
    let mut org = MusicOrganizer::with_rng(RecordingPlayer::new(), SmallRng::seed_from_u64(42));
    for (file, artist, title) in tracks {
        org.add_track(Track::new(*file, *artist, *title));
    }
    Console::new(org, Vec::new())
}

fn three() -> Console<RecordingPlayer, Vec<u8>> {
    console(&[
        ("a.mp3", "Daft Punk", "One More Time"),
        ("b.mp3", "Daftie", "Lullaby"),
        ("c.mp3", "Queen", "Bicycle Race"),
    ])
}

fn output(c: Console<RecordingPlayer, Vec<u8>>) -> String {
    let (_, out) = c.into_parts();
    String::from_utf8(out).unwrap()
}

#[test]
fn play_prints_now_playing() {
    let mut c = three();
    c.play(1).unwrap();
    assert_eq!(output(c), "Now playing: Daftie - Lullaby\n");
}

#[test]
fn play_out_of_range_prints_one_error_line_and_plays_nothing() {
    let mut c = three();
    c.play(7).unwrap();
    c.play(-3).unwrap();

    assert!(c.organizer().player().commands().is_empty());
    assert_eq!(output(c), "Index is too large: 7\nIndex cannot be negative: -3\n");
}

#[test]
fn list_one_prints_index_and_details() {
    let mut c = three();
    c.list_one(2).unwrap();
    c.list_one(3).unwrap();
    assert_eq!(output(c), "Track 2: Queen - Bicycle Race\nIndex is too large: 3\n");
}

#[test]
fn list_all_prints_header_lines_and_blank_separator() {
    let mut c = three();
    c.remove_track(1).unwrap();
    c.list_all().unwrap();

    assert_eq!(
        output(c),
        "Track listing: \nDaft Punk - One More Time\nQueen - Bicycle Race\n\n"
    );
}

#[test]
fn list_by_artist_prints_matches_only() {
    let mut c = three();
    c.list_by_artist("Daft").unwrap();
    assert_eq!(output(c), "Daft Punk - One More Time\nDaftie - Lullaby\n");
}

#[test]
fn remove_track_reports_bad_index_and_keeps_count() {
    let mut c = three();
    c.remove_track(-1).unwrap();
    c.count().unwrap();
    assert_eq!(output(c), "Index cannot be negative: -1\n3\n");
}

#[test]
fn play_sample_prints_nothing_on_success() {
    let mut c = three();
    c.play_sample(0).unwrap();
    c.play_sample(3).unwrap();

    assert_eq!(c.organizer().player().commands(), &[PlayerCmd::Sample("a.mp3".into())]);
    assert_eq!(output(c), "Index is too large: 3\n");
}

#[test]
fn play_first_is_quiet() {
    let mut c = three();
    c.play_first().unwrap();
    assert_eq!(c.organizer().player().started().len(), 1);
    assert_eq!(output(c), "");
}

#[test]
fn play_random_prints_the_started_track() {
    let mut c = three();
    c.play_random_track().unwrap();

    let started = c.organizer().player().started()[0].to_path_buf();
    let track = c
        .organizer()
        .list_all()
        .iter()
        .find(|t| t.filename() == started)
        .cloned()
        .unwrap();
    assert_eq!(output(c), format!("{}\n", render::now_playing(&track)));
}

#[test]
fn shuffle_prints_banners_around_one_line_per_sample() {
    let mut c = three();
    c.shuffle_all_tracks().unwrap();

    let sampled: Vec<_> = c
        .organizer()
        .player()
        .sampled()
        .iter()
        .map(|p| p.to_path_buf())
        .collect();
    let expected_lines: Vec<String> = sampled
        .iter()
        .map(|p| {
            let t = c
                .organizer()
                .list_all()
                .iter()
                .find(|t| t.filename() == p.as_path())
                .unwrap();
            render::now_playing(t)
        })
        .collect();

    let out = output(c);
    assert!(out.starts_with(render::SHUFFLE_START_BANNER));
    assert!(out.ends_with(&format!("{}\n", render::SHUFFLE_END_BANNER)));
    let now_playing: Vec<&str> = out.lines().filter(|l| l.starts_with("Now playing: ")).collect();
    assert_eq!(now_playing, expected_lines);
}

/// Accepts one now-playing line, then refuses further writes.
#[derive(Default)]
struct OneLineOut {
    lines: usize,
}

impl std::io::Write for OneLineOut {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if buf.starts_with(b"Now playing") {
            self.lines += 1;
            if self.lines > 1 {
                return Err(std::io::Error::other("closed"));
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn shuffle_stops_sampling_once_output_fails() {
    let mut org = MusicOrganizer::with_rng(RecordingPlayer::new(), SmallRng::seed_from_u64(42));
    for file in ["A-One.mp3", "B-Two.mp3", "C-Three.mp3"] {
        org.add_file(file);
    }
    let mut c = Console::new(org, OneLineOut::default());

    assert!(c.shuffle_all_tracks().is_err());
    assert_eq!(c.organizer().player().sampled().len(), 1);
}

#[test]
fn nightmare_prints_banner_after_starting_everything() {
    let mut c = three();
    c.nightmare_mode().unwrap();

    assert_eq!(c.organizer().player().started().len(), 3);
    assert_eq!(output(c), format!("{}\n", render::NIGHTMARE_BANNER));
}

#[test]
fn empty_collection_random_ops_print_nothing() {
    let mut c = console(&[]);
    c.play_random_track().unwrap();
    c.shuffle_all_tracks().unwrap();
    c.nightmare_mode().unwrap();
    c.play_first().unwrap();

    assert!(c.organizer().player().commands().is_empty());
    assert_eq!(output(c), "");
}

#[test]
fn stop_forwards_to_player() {
    let mut c = three();
    c.stop().unwrap();
    assert_eq!(c.organizer().player().commands(), &[PlayerCmd::Stop]);
}

#[test]
fn load_library_prints_track_count() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Queen-Bicycle Race.mp3"), b"not real").unwrap();

    let mut c = console(&[]);
    c.load_library(&TrackReader::default(), dir.path()).unwrap();

    assert_eq!(c.organizer().count(), 1);
    assert_eq!(output(c), "Music library loaded. 1 tracks.\n\n");
}
