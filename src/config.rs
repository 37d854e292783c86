//! Configuration loader and schema types.
//!
//! Settings control which chunks the embedder writes and how input
//! directories are scanned.

mod load;
mod schema;

pub use schema::*;
