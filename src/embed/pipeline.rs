use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{EmbedSettings, LibrarySettings};
use crate::error::{Error, Result};
use crate::library::{BatchState, collect_inputs};
use crate::metadata::TrackMetadata;
use crate::riff::{RiffSize, build_info_chunk, splice, strip_info_lists};
use crate::spreadsheet::parse_spreadsheet;
use crate::tags::TagWriter;

use super::{BatchReport, FileOutcome, persist_atomically};

/// How each file is rewritten.
#[derive(Debug, Clone, Default)]
pub struct EmbedOptions {
    pub write_riff_info: bool,
    pub replace_existing_info: bool,
    pub riff_size: RiffSize,
    /// Write results here instead of over the source files.
    pub out_dir: Option<PathBuf>,
    /// Build everything in memory but write nothing.
    pub dry_run: bool,
}

impl EmbedOptions {
    pub fn from_settings(settings: &EmbedSettings) -> Self {
        Self {
            write_riff_info: settings.write_riff_info,
            replace_existing_info: settings.replace_existing_info,
            riff_size: if settings.fix_riff_size {
                RiffSize::Recompute
            } else {
                RiffSize::Preserve
            },
            out_dir: None,
            dry_run: false,
        }
    }

    /// Where the rewritten `src` goes.
    pub fn destination(&self, src: &Path) -> Result<PathBuf> {
        match &self.out_dir {
            None => Ok(src.to_path_buf()),
            Some(dir) => {
                let name = src.file_name().ok_or_else(|| {
                    Error::Io(std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("{} has no file name", src.display()),
                    ))
                })?;
                Ok(dir.join(name))
            }
        }
    }
}

/// Produce the new WAV bytes for `meta`. The input buffer is not modified.
pub fn embed_bytes(wav: &[u8], meta: &TrackMetadata, opts: &EmbedOptions) -> Result<Vec<u8>> {
    if !opts.write_riff_info {
        return Ok(wav.to_vec());
    }

    let base = if opts.replace_existing_info {
        let (stripped, removed) = strip_info_lists(wav, opts.riff_size)?;
        if removed > 0 {
            debug!(removed, "dropped existing LIST/INFO chunks");
        }
        stripped
    } else {
        wav.to_vec()
    };

    let chunk = build_info_chunk(meta);
    splice(&base, &chunk, opts.riff_size)
}

/// Rewrite one file and return where the result was (or would be) written.
pub fn embed_file(
    meta: &TrackMetadata,
    opts: &EmbedOptions,
    tags: Option<&dyn TagWriter>,
) -> Result<PathBuf> {
    let src = &meta.file_path;
    let wav = fs::read(src)?;
    let out = embed_bytes(&wav, meta, opts)?;
    let dest = opts.destination(src)?;

    if opts.dry_run {
        debug!(path = %dest.display(), bytes = out.len(), "dry run: not writing");
        return Ok(dest);
    }

    persist_atomically(&dest, &out, |tmp| match tags {
        Some(writer) => writer.write_tags(tmp, meta),
        None => Ok(()),
    })?;
    Ok(dest)
}

/// Run the pipeline for every file in `state`. A failing file is recorded
/// and the batch moves on.
pub fn run_batch(
    state: &BatchState,
    opts: &EmbedOptions,
    tags: Option<&dyn TagWriter>,
) -> BatchReport {
    let mut report = BatchReport::default();

    for meta in state.files() {
        let result = embed_file(meta, opts, tags);
        match &result {
            Ok(dest) => info!(
                file = %meta.display_name,
                dest = %dest.display(),
                title = %meta.track_title,
                "embedded metadata"
            ),
            Err(e) => warn!(file = %meta.file_path.display(), error = %e, "embedding failed"),
        }
        report.push(FileOutcome {
            path: meta.file_path.clone(),
            result,
        });
    }

    info!(
        total = report.len(),
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );
    report
}

/// Collect `inputs`, match them against the `data` spreadsheet when given,
/// and embed every file.
///
/// An unreadable spreadsheet does not stop the batch: the error is kept on
/// the report and the files are embedded without matches.
pub fn embed_inputs(
    inputs: &[PathBuf],
    data: Option<&Path>,
    library: &LibrarySettings,
    opts: &EmbedOptions,
    tags: Option<&dyn TagWriter>,
) -> BatchReport {
    let mut state = BatchState::new(collect_inputs(inputs, library));
    if state.is_empty() {
        warn!("no WAV files to process");
        return BatchReport::default();
    }

    let mut data_error = None;
    if let Some(sheet) = data {
        match parse_spreadsheet(sheet) {
            Ok(decoded) => state = state.with_records(&decoded.records),
            Err(e) => {
                warn!(error = %e, "spreadsheet unreadable, embedding without matches");
                data_error = Some(e);
            }
        }
    }

    for file in state.files() {
        let missing = file.missing_fields();
        if !missing.is_empty() {
            warn!(file = %file.display_name, missing = ?missing, "incomplete metadata");
        }
    }

    let mut report = run_batch(&state, opts, tags);
    if let Some(err) = data_error {
        report.set_data_error(err);
    }
    report
}
