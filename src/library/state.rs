use tracing::{debug, info};

use crate::metadata::{TrackMetadata, TrackRecord};

use super::{apply_match, match_records};

/// The working set of files handed from one pipeline stage to the next.
///
/// Stages return a new state rather than mutating a shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchState {
    files: Vec<TrackMetadata>,
}

impl BatchState {
    pub fn new(files: Vec<TrackMetadata>) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &[TrackMetadata] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Join spreadsheet records onto the files by display name.
    pub fn with_records(&self, records: &[TrackRecord]) -> Self {
        let names: Vec<&str> = self.files.iter().map(|f| f.display_name.as_str()).collect();
        let matches = match_records(records, &names);

        let mut matched = 0usize;
        let files = self
            .files
            .iter()
            .map(|file| {
                let found = matches
                    .get(file.display_name.as_str())
                    .copied()
                    .unwrap_or_default();
                let mut next = file.clone();
                apply_match(&mut next, &found);
                if found.title.is_some() {
                    matched += 1;
                } else {
                    debug!(file = %file.display_name, "no title match");
                }
                next
            })
            .collect();

        info!(files = self.len(), matched, "matched spreadsheet records");
        Self { files }
    }
}
