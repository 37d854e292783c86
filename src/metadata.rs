//! Metadata model shared by the spreadsheet decoder, the matcher and the
//! writers.
//!
//! `TrackRecord` is what a spreadsheet row decodes into; `TrackMetadata` is
//! the per-file value that the RIFF and ID3 writers consume.

mod credits;
mod model;

pub use credits::*;
pub use model::*;
