use crate::error::{Error, Result};

use super::info::{INFO_FORM, LIST_ID};
use super::{CHUNK_HEADER_LEN, RIFF_MAGIC, WAVE_FORM};

pub const FMT_ID: &[u8; 4] = b"fmt ";

/// Offset of the first sub-chunk, right after `"RIFF" + size + "WAVE"`.
const FIRST_CHUNK_OFFSET: usize = 12;

/// What to do with the outer RIFF size field after the buffer changes length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RiffSize {
    /// Rewrite bytes 4..8 as `len - 8`.
    #[default]
    Recompute,
    /// Leave bytes 4..8 untouched.
    Preserve,
}

/// Location of one sub-chunk inside a WAV buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkInfo {
    pub id: [u8; 4],
    /// Offset of the chunk header.
    pub offset: usize,
    /// Declared payload size, excluding the pad byte.
    pub size: u32,
}

impl ChunkInfo {
    pub fn id_str(&self) -> String {
        String::from_utf8_lossy(&self.id).into_owned()
    }

    /// Offset just past the payload, pad byte included.
    pub fn end(&self) -> usize {
        let size = self.size as usize;
        self.offset
            .saturating_add(CHUNK_HEADER_LEN)
            .saturating_add(size)
            .saturating_add(size % 2)
    }
}

fn check_header(wav: &[u8]) -> Result<()> {
    if wav.len() < FIRST_CHUNK_OFFSET {
        return Err(Error::InvalidFormat(format!(
            "{} bytes is too short for a RIFF header",
            wav.len()
        )));
    }
    if &wav[0..4] != RIFF_MAGIC {
        return Err(Error::InvalidFormat("missing RIFF magic".to_string()));
    }
    if &wav[8..12] != WAVE_FORM {
        return Err(Error::InvalidFormat("RIFF form type is not WAVE".to_string()));
    }
    Ok(())
}

fn read_u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

/// Walk the sub-chunks of a WAV buffer in file order.
///
/// Each step consumes the 8-byte header, the payload and the pad byte of odd
/// sizes. The walk stops once fewer than 8 bytes remain; a final chunk whose
/// payload runs past the end of the buffer is still reported.
pub fn chunks(wav: &[u8]) -> Result<Vec<ChunkInfo>> {
    check_header(wav)?;

    let mut found = Vec::new();
    let mut pos = FIRST_CHUNK_OFFSET;
    while wav.len().saturating_sub(pos) >= CHUNK_HEADER_LEN {
        let mut id = [0u8; 4];
        id.copy_from_slice(&wav[pos..pos + 4]);
        let info = ChunkInfo {
            id,
            offset: pos,
            size: read_u32_le(wav, pos + 4),
        };
        found.push(info);
        pos = info.end();
    }
    Ok(found)
}

/// Offset immediately after the `fmt ` chunk (pad byte included).
pub fn find_fmt_end(wav: &[u8]) -> Result<usize> {
    let fmt = chunks(wav)?
        .into_iter()
        .find(|c| &c.id == FMT_ID)
        .ok_or(Error::MissingChunk("fmt "))?;

    let payload_end = fmt.offset + CHUNK_HEADER_LEN + fmt.size as usize;
    if payload_end > wav.len() {
        return Err(Error::InvalidFormat(format!(
            "'fmt ' chunk at offset {} runs past end of file",
            fmt.offset
        )));
    }
    Ok(fmt.end().min(wav.len()))
}

fn patch_riff_size(wav: &mut [u8], riff_size: RiffSize) {
    if riff_size == RiffSize::Recompute {
        let size = (wav.len() - CHUNK_HEADER_LEN) as u32;
        wav[4..8].copy_from_slice(&size.to_le_bytes());
    }
}

/// Insert `chunk` right after the `fmt ` chunk of `wav`.
///
/// The input is left untouched; the returned buffer is
/// `wav[..fmt_end] + chunk + wav[fmt_end..]`, with the outer RIFF size handled
/// according to `riff_size`.
pub fn splice(wav: &[u8], chunk: &[u8], riff_size: RiffSize) -> Result<Vec<u8>> {
    let fmt_end = find_fmt_end(wav)?;

    let mut out = Vec::with_capacity(wav.len() + chunk.len());
    out.extend_from_slice(&wav[..fmt_end]);
    out.extend_from_slice(chunk);
    out.extend_from_slice(&wav[fmt_end..]);

    patch_riff_size(&mut out, riff_size);
    Ok(out)
}

fn is_info_list(wav: &[u8], chunk: &ChunkInfo) -> bool {
    let form = chunk.offset + CHUNK_HEADER_LEN;
    &chunk.id == LIST_ID && wav.get(form..form + 4) == Some(INFO_FORM.as_slice())
}

/// Remove every `LIST/INFO` chunk, so a re-embed replaces rather than stacks
/// metadata. Returns the buffer and the number of chunks removed.
pub fn strip_info_lists(wav: &[u8], riff_size: RiffSize) -> Result<(Vec<u8>, usize)> {
    let lists: Vec<ChunkInfo> = chunks(wav)?
        .into_iter()
        .filter(|c| is_info_list(wav, c))
        .collect();
    if lists.is_empty() {
        return Ok((wav.to_vec(), 0));
    }

    let mut out = Vec::with_capacity(wav.len());
    let mut pos = 0;
    for list in &lists {
        out.extend_from_slice(&wav[pos..list.offset]);
        pos = list.end().min(wav.len());
    }
    out.extend_from_slice(&wav[pos..]);

    patch_riff_size(&mut out, riff_size);
    Ok((out, lists.len()))
}
