use crate::metadata::{TrackMetadata, comment_text, present};

use super::CHUNK_HEADER_LEN;

pub const LIST_ID: &[u8; 4] = b"LIST";
pub const INFO_FORM: &[u8; 4] = b"INFO";

/// Title.
pub const INAM: &[u8; 4] = b"INAM";
/// Artist; carries the composers string.
pub const IART: &[u8; 4] = b"IART";
/// Album; carries the source program.
pub const IALB: &[u8; 4] = b"IALB";
/// Comment; carries the BPM/Key/Publishers summary.
pub const ICMT: &[u8; 4] = b"ICMT";

/// One `LIST/INFO` sub-entry before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoEntry {
    pub tag: [u8; 4],
    pub value: String,
}

impl InfoEntry {
    fn new(tag: &[u8; 4], value: impl Into<String>) -> Self {
        Self {
            tag: *tag,
            value: value.into(),
        }
    }

    /// Append `tag + size + value (+ pad)` to `out`.
    ///
    /// The declared size is the unpadded UTF-8 length; a single `0x00` follows
    /// odd-length values so the next entry starts on a word boundary.
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        let bytes = self.value.as_bytes();
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(bytes);
        if bytes.len() % 2 == 1 {
            out.push(0);
        }
    }
}

/// Entries for `meta` in output order: `INAM`, `IART`, `IALB`, `ICMT`.
pub fn info_entries(meta: &TrackMetadata) -> Vec<InfoEntry> {
    let mut entries = Vec::with_capacity(4);
    if let Some(v) = present(&meta.track_title) {
        entries.push(InfoEntry::new(INAM, v));
    }
    if let Some(v) = present(&meta.composers) {
        entries.push(InfoEntry::new(IART, v));
    }
    if let Some(v) = present(&meta.source_program) {
        entries.push(InfoEntry::new(IALB, v));
    }
    if let Some(comment) = comment_text(meta) {
        entries.push(InfoEntry::new(ICMT, comment));
    }
    entries
}

/// Serialize a complete `LIST` chunk of form type `INFO`.
///
/// The LIST size covers `"INFO"` plus every encoded entry including pad
/// bytes, so it always equals `len - 8`. Empty metadata yields the 12-byte
/// `LIST\x04\0\0\0INFO`.
pub fn build_info_chunk(meta: &TrackMetadata) -> Vec<u8> {
    let mut payload = Vec::with_capacity(64);
    payload.extend_from_slice(INFO_FORM);
    for entry in info_entries(meta) {
        entry.encode_into(&mut payload);
    }

    let mut chunk = Vec::with_capacity(CHUNK_HEADER_LEN + payload.len());
    chunk.extend_from_slice(LIST_ID);
    chunk.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    chunk.extend_from_slice(&payload);
    chunk
}
