use std::path::PathBuf;

use crate::error::{Error, Result};

/// Result of processing one source file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Destination on success.
    pub result: Result<PathBuf>,
}

/// Per-file outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
    /// Set when the metadata spreadsheet could not be read; the files were
    /// then embedded without matches.
    data_error: Option<Error>,
}

impl BatchReport {
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn set_data_error(&mut self, err: Error) {
        self.data_error = Some(err);
    }

    pub fn data_error(&self) -> Option<&Error> {
        self.data_error.as_ref()
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &Error)> {
        self.outcomes()
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.path, e)))
    }

    /// The spreadsheet error if there was one, else `Err(BatchFailed)` when
    /// any file failed.
    pub fn into_result(self) -> Result<()> {
        if let Some(err) = self.data_error {
            return Err(err);
        }
        match self.failed() {
            0 => Ok(()),
            failed => Err(Error::BatchFailed {
                failed,
                total: self.len(),
            }),
        }
    }
}
