//! Positional spreadsheet decoding.
//!
//! Data exports place every field at a fixed column offset, with writer and
//! publisher credits in repeating groups. `source` turns a `.csv` or `.xlsx`
//! file into rows of cell text and `decode` turns those rows into
//! `TrackRecord`s.

mod decode;
mod source;

pub use decode::*;
pub use source::*;
