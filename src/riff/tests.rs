use super::*;
use crate::error::Error;
use crate::metadata::TrackMetadata;

/// Assemble a WAVE buffer from raw sub-chunks, padding odd payloads.
pub(crate) fn wav_from_chunks(chunks: &[(&[u8; 4], &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(WAVE_FORM);
    for (id, payload) in chunks {
        body.extend_from_slice(*id);
        body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        body.extend_from_slice(payload);
        if payload.len() % 2 == 1 {
            body.push(0);
        }
    }
    let mut wav = Vec::new();
    wav.extend_from_slice(RIFF_MAGIC);
    wav.extend_from_slice(&(body.len() as u32).to_le_bytes());
    wav.extend_from_slice(&body);
    wav
}

/// 16-bit mono PCM `fmt ` payload at 44.1 kHz.
pub(crate) fn pcm_fmt() -> Vec<u8> {
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes()); // PCM
    fmt.extend_from_slice(&1u16.to_le_bytes()); // channels
    fmt.extend_from_slice(&44_100u32.to_le_bytes());
    fmt.extend_from_slice(&88_200u32.to_le_bytes());
    fmt.extend_from_slice(&2u16.to_le_bytes());
    fmt.extend_from_slice(&16u16.to_le_bytes());
    fmt
}

/// A small playable WAV: `fmt ` followed by a few silent samples.
pub(crate) fn minimal_wav() -> Vec<u8> {
    wav_from_chunks(&[(FMT_ID, pcm_fmt().as_slice()), (b"data", &[0u8; 16][..])])
}

fn song_metadata() -> TrackMetadata {
    TrackMetadata {
        track_title: "Song".into(),
        composers: "Jane (ASCAP) 50%".into(),
        source_program: "Show".into(),
        bpm: "120".into(),
        key: "C".into(),
        publishers: "Acme Pub [123]".into(),
        ..TrackMetadata::default()
    }
}

fn declared_size(chunk: &[u8]) -> usize {
    u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]) as usize
}

#[test]
fn empty_metadata_builds_bare_info_list() {
    let chunk = build_info_chunk(&TrackMetadata::default());
    assert_eq!(chunk, b"LIST\x04\x00\x00\x00INFO".to_vec());
}

#[test]
fn list_size_matches_length_including_pads() {
    let cases = [
        TrackMetadata::default(),
        song_metadata(),
        TrackMetadata {
            track_title: "Odd".into(),
            ..TrackMetadata::default()
        },
        TrackMetadata {
            key: "F♯ minor".into(),
            ..TrackMetadata::default()
        },
    ];
    for meta in &cases {
        let chunk = build_info_chunk(meta);
        assert_eq!(&chunk[0..4], b"LIST");
        assert_eq!(&chunk[8..12], b"INFO");
        assert_eq!(declared_size(&chunk), chunk.len() - 8);
        assert_eq!(chunk.len() % 2, 0);
    }
}

#[test]
fn odd_value_is_padded_but_declared_unpadded() {
    let meta = TrackMetadata {
        track_title: "Odd".into(),
        ..TrackMetadata::default()
    };
    let chunk = build_info_chunk(&meta);
    assert_eq!(&chunk[12..16], b"INAM");
    assert_eq!(declared_size(&chunk[12..]), 3);
    assert_eq!(&chunk[20..23], b"Odd");
    assert_eq!(chunk[23], 0);
    assert_eq!(chunk.len(), 24);
}

#[test]
fn entries_follow_fixed_tag_order() {
    let tags: Vec<[u8; 4]> = info_entries(&song_metadata())
        .into_iter()
        .map(|e| e.tag)
        .collect();
    assert_eq!(tags, vec![*INAM, *IART, *IALB, *ICMT]);

    let comment = info_entries(&song_metadata()).pop().unwrap();
    assert_eq!(comment.value, "BPM: 120 | Key: C | Publishers: Acme Pub [123]");
}

#[test]
fn empty_fields_are_omitted() {
    let meta = TrackMetadata {
        source_program: "Show".into(),
        ..TrackMetadata::default()
    };
    let entries = info_entries(&meta);
    assert_eq!(entries.len(), 1);
    assert_eq!(&entries[0].tag, IALB);
}

#[test]
fn build_is_deterministic() {
    let meta = song_metadata();
    assert_eq!(build_info_chunk(&meta), build_info_chunk(&meta));
}

#[test]
fn splice_places_chunk_right_after_fmt() {
    let wav = minimal_wav();
    let fmt_end = find_fmt_end(&wav).unwrap();
    assert_eq!(fmt_end, 12 + 8 + 16);

    let list = build_info_chunk(&song_metadata());
    let out = splice(&wav, &list, RiffSize::Recompute).unwrap();

    assert_eq!(out.len(), wav.len() + list.len());
    assert_eq!(&out[fmt_end..fmt_end + list.len()], list.as_slice());
    assert_eq!(&out[fmt_end + list.len()..], &wav[fmt_end..]);

    let ids: Vec<String> = chunks(&out).unwrap().iter().map(|c| c.id_str()).collect();
    assert_eq!(ids, vec!["fmt ", "LIST", "data"]);
    let rescanned = chunks(&out).unwrap();
    assert_eq!(rescanned[1].offset, fmt_end);
}

#[test]
fn splice_recomputes_or_preserves_riff_size() {
    let wav = minimal_wav();
    let list = build_info_chunk(&song_metadata());

    let fixed = splice(&wav, &list, RiffSize::Recompute).unwrap();
    assert_eq!(declared_size(&fixed), fixed.len() - 8);

    let legacy = splice(&wav, &list, RiffSize::Preserve).unwrap();
    assert_eq!(&legacy[4..8], &wav[4..8]);
}

#[test]
fn splice_skips_padded_chunks_before_fmt() {
    let wav = wav_from_chunks(&[
        (b"JUNK", &b"abc"[..]),
        (FMT_ID, pcm_fmt().as_slice()),
        (b"data", &[0u8; 4][..]),
    ]);
    // JUNK: 8 + 3 + 1 pad
    assert_eq!(find_fmt_end(&wav).unwrap(), 12 + 12 + 8 + 16);

    let out = splice(&wav, b"TEST\x00\x00\x00\x00", RiffSize::Recompute).unwrap();
    let ids: Vec<String> = chunks(&out).unwrap().iter().map(|c| c.id_str()).collect();
    assert_eq!(ids, vec!["JUNK", "fmt ", "TEST", "data"]);
}

#[test]
fn splice_rejects_non_wave_buffers() {
    let chunk = build_info_chunk(&TrackMetadata::default());

    let mut not_riff = minimal_wav();
    not_riff[0..4].copy_from_slice(b"RIFX");
    assert!(matches!(
        splice(&not_riff, &chunk, RiffSize::Recompute),
        Err(Error::InvalidFormat(_))
    ));

    let mut not_wave = minimal_wav();
    not_wave[8..12].copy_from_slice(b"AVI ");
    assert!(matches!(
        splice(&not_wave, &chunk, RiffSize::Recompute),
        Err(Error::InvalidFormat(_))
    ));

    assert!(matches!(
        splice(b"RIFF", &chunk, RiffSize::Recompute),
        Err(Error::InvalidFormat(_))
    ));
}

#[test]
fn splice_without_fmt_is_missing_chunk() {
    let wav = wav_from_chunks(&[(b"data", &[0u8; 8][..])]);
    assert!(matches!(
        splice(&wav, b"LIST\x04\x00\x00\x00INFO", RiffSize::Recompute),
        Err(Error::MissingChunk("fmt "))
    ));
}

#[test]
fn truncated_fmt_is_invalid() {
    let mut wav = minimal_wav();
    wav.truncate(12 + 8 + 10);
    assert!(matches!(find_fmt_end(&wav), Err(Error::InvalidFormat(_))));
}

#[test]
fn strip_info_lists_removes_previous_metadata() {
    let wav = minimal_wav();
    let once = splice(&wav, &build_info_chunk(&song_metadata()), RiffSize::Recompute).unwrap();

    let (stripped, removed) = strip_info_lists(&once, RiffSize::Recompute).unwrap();
    assert_eq!(removed, 1);
    assert_eq!(stripped, wav);

    let (untouched, removed) = strip_info_lists(&wav, RiffSize::Recompute).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(untouched, wav);
}

#[test]
fn strip_keeps_non_info_lists() {
    let wav = wav_from_chunks(&[
        (FMT_ID, pcm_fmt().as_slice()),
        (b"LIST", &b"adtlxxxx"[..]),
        (b"data", &[0u8; 4][..]),
    ]);
    let (out, removed) = strip_info_lists(&wav, RiffSize::Recompute).unwrap();
    assert_eq!(removed, 0);
    assert_eq!(out, wav);
}
