use super::*;
use crate::config::LibrarySettings;
use crate::error::{Error, Result};
use crate::library::BatchState;
use crate::metadata::TrackMetadata;
use crate::riff::tests::minimal_wav;
use crate::riff::{RiffSize, chunks};
use crate::tags::{Id3TagWriter, TagWriter, read_tags};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn opts() -> EmbedOptions {
    EmbedOptions {
        write_riff_info: true,
        replace_existing_info: true,
        riff_size: RiffSize::Recompute,
        out_dir: None,
        dry_run: false,
    }
}

fn song_at(path: &Path) -> TrackMetadata {
    let mut m = TrackMetadata::for_path(path);
    m.track_title = "Song".into();
    m.composers = "Jane (ASCAP) 50%".into();
    m.bpm = "120".into();
    m
}

fn chunk_ids(wav: &[u8]) -> Vec<String> {
    chunks(wav).unwrap().iter().map(|c| c.id_str()).collect()
}

fn riff_size(wav: &[u8]) -> usize {
    u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]) as usize
}

struct FailingWriter;

impl TagWriter for FailingWriter {
    fn write_tags(&self, _path: &Path, _meta: &TrackMetadata) -> Result<()> {
        Err(Error::Io(std::io::Error::other("tag writer failed")))
    }
}

#[test]
fn re_embedding_replaces_info_list() {
    let meta = song_at(Path::new("song_master.wav"));
    let once = embed_bytes(&minimal_wav(), &meta, &opts()).unwrap();
    let twice = embed_bytes(&once, &meta, &opts()).unwrap();

    assert_eq!(chunk_ids(&once), vec!["fmt ", "LIST", "data"]);
    assert_eq!(once, twice);

    let stacked = EmbedOptions {
        replace_existing_info: false,
        ..opts()
    };
    let twice = embed_bytes(&once, &meta, &stacked).unwrap();
    assert_eq!(chunk_ids(&twice), vec!["fmt ", "LIST", "LIST", "data"]);
}

#[test]
fn riff_output_can_be_disabled() {
    let wav = minimal_wav();
    let off = EmbedOptions {
        write_riff_info: false,
        ..opts()
    };
    let meta = song_at(Path::new("a.wav"));
    assert_eq!(embed_bytes(&wav, &meta, &off).unwrap(), wav);
}

#[test]
fn embed_file_in_place_writes_riff_and_id3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song_master.wav");
    fs::write(&path, minimal_wav()).unwrap();

    let writer = Id3TagWriter::default();
    let dest = embed_file(&song_at(&path), &opts(), Some(&writer)).unwrap();
    assert_eq!(dest, path);

    let out = fs::read(&path).unwrap();
    let ids = chunk_ids(&out);
    assert_eq!(&ids[..3], &["fmt ", "LIST", "data"]);
    assert!(ids.iter().any(|id| id.eq_ignore_ascii_case("id3 ")));
    assert_eq!(riff_size(&out), out.len() - 8);

    let id3 = id3::Tag::read_from_path(&path).unwrap();
    assert_eq!(id3::TagLike::title(&id3), Some("Song"));

    let tags = read_tags(&path).unwrap();
    let riff = tags.iter().find(|t| t.kind == "RiffInfo").unwrap();
    assert_eq!(riff.title.as_deref(), Some("Song"));
}

#[test]
fn out_dir_leaves_source_untouched() {
    let src_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let path = src_dir.path().join("song_master.wav");
    let original = minimal_wav();
    fs::write(&path, &original).unwrap();

    let o = EmbedOptions {
        out_dir: Some(out_dir.path().join("tagged")),
        ..opts()
    };
    let dest = embed_file(&song_at(&path), &o, None).unwrap();

    assert_eq!(dest, out_dir.path().join("tagged").join("song_master.wav"));
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(chunk_ids(&fs::read(&dest).unwrap()), vec!["fmt ", "LIST", "data"]);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song_master.wav");
    let original = minimal_wav();
    fs::write(&path, &original).unwrap();

    let o = EmbedOptions {
        dry_run: true,
        ..opts()
    };
    embed_file(&song_at(&path), &o, Some(&Id3TagWriter::default())).unwrap();
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn tag_failure_keeps_original_and_cleans_up() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("song_master.wav");
    let original = minimal_wav();
    fs::write(&path, &original).unwrap();

    let err = embed_file(&song_at(&path), &opts(), Some(&FailingWriter)).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(fs::read(&path).unwrap(), original);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn batch_continues_past_failures() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("a_song_take.wav");
    let bad = dir.path().join("b_broken.wav");
    let no_fmt = dir.path().join("c_nofmt.wav");
    fs::write(&good, minimal_wav()).unwrap();
    fs::write(&bad, b"definitely not a wav file").unwrap();
    fs::write(
        &no_fmt,
        crate::riff::tests::wav_from_chunks(&[(b"data", &[0u8; 4][..])]),
    )
    .unwrap();

    let state = BatchState::new(vec![
        song_at(&good),
        song_at(&bad),
        song_at(&no_fmt),
    ]);
    let report = run_batch(&state, &opts(), None);

    assert_eq!(report.len(), 3);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 2);

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures[0].0, &bad);
    assert!(matches!(failures[0].1, Error::InvalidFormat(_)));
    assert_eq!(failures[1].0, &no_fmt);
    assert!(matches!(failures[1].1, Error::MissingChunk(_)));

    assert_eq!(fs::read(&bad).unwrap(), b"definitely not a wav file");
    assert!(matches!(
        report.into_result(),
        Err(Error::BatchFailed {
            failed: 2,
            total: 3
        })
    ));
}

#[test]
fn missing_file_is_an_io_failure() {
    let state = BatchState::new(vec![song_at(Path::new("/nonexistent/wavembed/x.wav"))]);
    let report = run_batch(&state, &opts(), None);
    assert!(matches!(
        report.outcomes()[0].result,
        Err(Error::Io(_))
    ));
}

#[test]
fn unreadable_spreadsheet_still_embeds_and_reports() {
    let dir = tempdir().unwrap();
    let wavs = dir.path().join("wavs");
    fs::create_dir_all(&wavs).unwrap();
    let a = wavs.join("song_master.wav");
    let b = wavs.join("other_take.wav");
    fs::write(&a, minimal_wav()).unwrap();
    fs::write(&b, minimal_wav()).unwrap();
    let sheet = dir.path().join("export.xlsx");
    fs::write(&sheet, b"not a workbook").unwrap();

    let report = embed_inputs(
        &[wavs.clone()],
        Some(&sheet),
        &LibrarySettings::default(),
        &opts(),
        None,
    );

    assert_eq!(report.len(), 2);
    assert_eq!(report.succeeded(), 2);
    assert!(matches!(report.data_error(), Some(Error::Spreadsheet { .. })));
    for path in [&a, &b] {
        assert_eq!(
            chunk_ids(&fs::read(path).unwrap()),
            vec!["fmt ", "LIST", "data"]
        );
    }
    match report.into_result() {
        Err(Error::Spreadsheet { path, .. }) => assert_eq!(path, sheet),
        other => panic!("expected spreadsheet error, got {other:?}"),
    }
}

#[test]
fn readable_spreadsheet_matches_before_embedding() {
    let dir = tempdir().unwrap();
    let wav = dir.path().join("song_master.wav");
    fs::write(&wav, minimal_wav()).unwrap();
    let sheet = dir.path().join("export.csv");
    let mut header = vec!["h".to_string(); crate::spreadsheet::MIN_COLUMNS];
    header[0] = "File Name".into();
    let mut row = vec![String::new(); crate::spreadsheet::MIN_COLUMNS];
    row[crate::spreadsheet::TITLE_COL] = "Song".into();
    fs::write(&sheet, format!("{}\n{}\n", header.join(","), row.join(","))).unwrap();

    let report = embed_inputs(
        &[wav.clone()],
        Some(&sheet),
        &LibrarySettings::default(),
        &opts(),
        None,
    );

    assert!(report.data_error().is_none());
    assert_eq!(report.succeeded(), 1);
    let tags = read_tags(&wav).unwrap();
    let riff = tags.iter().find(|t| t.kind == "RiffInfo").unwrap();
    assert_eq!(riff.title.as_deref(), Some("Song"));
    assert!(report.into_result().is_ok());
}
