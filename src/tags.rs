//! ID3 tag writing and tag read-back.
//!
//! The ID3 frame encoding itself is delegated to the `id3` crate; this module
//! only decides which frames a `TrackMetadata` turns into.

mod inspect;
mod writer;

pub use inspect::*;
pub use writer::*;
