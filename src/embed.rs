//! The per-file embedding pipeline and the batch driver around it.
//!
//! Each file goes read -> strip old INFO -> build chunk -> splice -> temp
//! file -> tag -> persist. Nothing touches the destination until the new
//! file is complete.

mod persist;
mod pipeline;
mod report;

pub use persist::*;
pub use pipeline::*;
pub use report::*;

#[cfg(test)]
mod tests;
