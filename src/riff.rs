//! RIFF/WAVE chunk handling.
//!
//! `info` serializes a `LIST/INFO` chunk from track metadata and `splice`
//! walks a WAV container and inserts a chunk right after `fmt `.

mod info;
mod splice;

pub use info::*;
pub use splice::*;

/// `RIFF` container magic.
pub const RIFF_MAGIC: &[u8; 4] = b"RIFF";
/// WAV form type.
pub const WAVE_FORM: &[u8; 4] = b"WAVE";
/// Chunk header: 4-byte id plus 4-byte little-endian size.
pub const CHUNK_HEADER_LEN: usize = 8;

#[cfg(test)]
pub(crate) mod tests;
