//! Audio file discovery and spreadsheet matching.
//!
//! `scan` gathers WAV files into blank `TrackMetadata`, `matching` joins them
//! with decoded spreadsheet records, and `BatchState` carries the result from
//! one pipeline stage to the next.

mod matching;
mod scan;
mod state;

pub use matching::*;
pub use scan::*;
pub use state::*;
