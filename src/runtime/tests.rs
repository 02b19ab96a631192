use super::*;
use std::fs;
use tempfile::tempdir;

fn write_song(root: &Path, dir: &str, descriptor: &str, audio: Option<(&str, &[u8])>) {
    let song = root.join(dir);
    fs::create_dir_all(&song).unwrap();
    fs::write(song.join(format!("{dir} [Normal].osu")), descriptor).unwrap();
    if let Some((name, bytes)) = audio {
        fs::write(song.join(name), bytes).unwrap();
    }
}

fn cfg(songs_dir: &Path, out_dir: &Path) -> RunConfig {
    RunConfig {
        songs_dir: songs_dir.to_path_buf(),
        out_dir: out_dir.to_path_buf(),
        progress: ProgressMode::Never,
        title_width: 30,
        follow_links: false,
    }
}

#[test]
fn exports_good_song_and_skips_song_without_audio() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();
    let out_dir = out.path().join("Songs");

    write_song(
        root.path(),
        "1 Foo - Bar",
        "[General]\nAudioFilename: audio.mp3\n[Metadata]\nTitle:Bar\nArtist:Foo\n",
        Some(("audio.mp3", b"mp3 data")),
    );
    write_song(
        root.path(),
        "2 Missing - Audio",
        "AudioFilename: gone.ogg\nTitle:Audio\nArtist:Missing\n",
        None,
    );

    let mut report = Vec::new();
    let summary = extract_all(&cfg(root.path(), &out_dir), &mut report, false).unwrap();

    assert_eq!(summary, Summary { exported: 1, skipped: 1 });
    let files: Vec<_> = fs::read_dir(&out_dir).unwrap().map(|e| e.unwrap().file_name()).collect();
    assert_eq!(files, vec![std::ffi::OsString::from("Foo - Bar.mp3")]);
    assert_eq!(fs::read(out_dir.join("Foo - Bar.mp3")).unwrap(), b"mp3 data");

    let report = String::from_utf8(report).unwrap();
    assert!(report.contains("Exported: 1\nSkipped: 1\n"));
}

#[test]
fn folder_without_descriptor_is_skipped_without_affecting_others() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    fs::create_dir(root.path().join("empty")).unwrap();
    fs::write(root.path().join("empty").join("audio.mp3"), b"orphan").unwrap();
    write_song(
        root.path(),
        "song",
        "AudioFilename:a.ogg\nTitle:T\nArtist:A\n",
        Some(("a.ogg", b"ogg")),
    );

    let summary = extract_all(&cfg(root.path(), out.path()), io::sink(), false).unwrap();
    assert_eq!(summary, Summary { exported: 1, skipped: 1 });
    assert!(out.path().join("A - T.ogg").is_file());
}

#[test]
fn plain_files_in_root_are_neither_exported_nor_skipped() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    fs::write(root.path().join("osu!.db"), b"db").unwrap();
    write_song(
        root.path(),
        "song",
        "AudioFilename:a.mp3\nTitle:T\nArtist:A\n",
        Some(("a.mp3", b"x")),
    );

    let summary = extract_all(&cfg(root.path(), out.path()), io::sink(), false).unwrap();
    assert_eq!(summary, Summary { exported: 1, skipped: 0 });
}

#[test]
fn incomplete_descriptor_is_skipped() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    write_song(root.path(), "song", "Title:T\nArtist:A\n", Some(("a.mp3", b"x")));

    let summary = extract_all(&cfg(root.path(), out.path()), io::sink(), false).unwrap();
    assert_eq!(summary, Summary { exported: 0, skipped: 1 });
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn existing_output_dir_keeps_unrelated_files() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();
    fs::write(out.path().join("keep.txt"), b"keep").unwrap();

    write_song(
        root.path(),
        "song",
        "AudioFilename:a.mp3\nTitle:T\nArtist:A\n",
        Some(("a.mp3", b"x")),
    );

    extract_all(&cfg(root.path(), out.path()), io::sink(), false).unwrap();
    assert_eq!(fs::read(out.path().join("keep.txt")).unwrap(), b"keep");
    assert!(out.path().join("A - T.mp3").is_file());
}

#[test]
fn unreadable_root_is_fatal() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    let err = extract_all(&cfg(&root.path().join("missing"), out.path()), io::sink(), false)
        .unwrap_err();
    assert!(matches!(err, FatalError::RootUnreadable { .. }));
}

#[test]
fn uncreatable_destination_is_fatal() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();
    let blocker = out.path().join("file");
    fs::write(&blocker, b"not a dir").unwrap();

    let err = extract_all(&cfg(root.path(), &blocker), io::sink(), false).unwrap_err();
    assert!(matches!(err, FatalError::DestinationUncreatable { .. }));
}

#[test]
fn progress_counts_directories_and_falls_back_to_folder_name() {
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    fs::create_dir(root.path().join("broken")).unwrap();
    write_song(
        root.path(),
        "ok",
        "AudioFilename:a.mp3\nTitle:Title\nArtist:A\n",
        Some(("a.mp3", b"x")),
    );
    fs::write(root.path().join("stray.txt"), b"").unwrap();

    let mut report = Vec::new();
    extract_all(&cfg(root.path(), out.path()), &mut report, true).unwrap();

    let report = String::from_utf8(report).unwrap();
    assert!(report.starts_with("1/2 broken\r2/2 Title \r"));
}

#[test]
fn flags_override_settings() {
    use crate::config::Settings;
    use clap::Parser;

    let mut settings = Settings::default();
    settings.export.out_dir = PathBuf::from("from-config");
    settings.progress.title_width = 12;

    let args = Args::try_parse_from(["osu-audio-extract", "-p", "songs", "--progress", "always"])
        .unwrap();
    let run = settings::run_config(args, &settings);
    assert_eq!(run.out_dir, PathBuf::from("from-config"));
    assert_eq!(run.progress, ProgressMode::Always);
    assert_eq!(run.title_width, 12);

    let args = Args::try_parse_from(["osu-audio-extract", "-p", "songs", "-d", "cli"]).unwrap();
    let run = settings::run_config(args, &settings);
    assert_eq!(run.out_dir, PathBuf::from("cli"));
    assert_eq!(run.progress, ProgressMode::Auto);
}

#[test]
fn broken_settings_fall_back_to_defaults() {
    let dir = tempdir().unwrap();

    let invalid = dir.path().join("invalid.toml");
    fs::write(&invalid, "[export]\nout_dir = \"\"\n").unwrap();
    assert_eq!(
        settings::load_settings(Some(invalid.as_path())).export.out_dir,
        PathBuf::from("Songs")
    );

    let malformed = dir.path().join("malformed.toml");
    fs::write(&malformed, "[export\nout_dir = ").unwrap();
    assert_eq!(
        settings::load_settings(Some(malformed.as_path())).export.out_dir,
        PathBuf::from("Songs")
    );
}
