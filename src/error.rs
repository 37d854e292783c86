//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The buffer is not a `RIFF`/`WAVE` container.
    #[error("invalid WAV format: {0}")]
    InvalidFormat(String),

    /// A required chunk is absent from the container.
    #[error("missing '{0}' chunk")]
    MissingChunk(&'static str),

    /// Spreadsheet extension is neither `.csv` nor `.xlsx`.
    #[error("unsupported spreadsheet format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Reading or parsing a spreadsheet failed; `source` keeps the cause.
    #[error("failed to parse spreadsheet {}: {source}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ID3 tag error: {0}")]
    Tag(#[from] id3::Error),

    #[error("tag read error: {0}")]
    Probe(#[from] lofty::error::LoftyError),

    #[error("metadata JSON error: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },
}

impl Error {
    pub fn spreadsheet(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Spreadsheet {
            path: path.into(),
            source: source.into(),
        }
    }
}
