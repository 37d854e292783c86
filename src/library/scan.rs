use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::metadata::TrackMetadata;

pub(crate) fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn sort_by_display(files: &mut [TrackMetadata]) {
    files.sort_by(|a, b| {
        a.display_name
            .to_lowercase()
            .cmp(&b.display_name.to_lowercase())
    });
}

/// Find audio files under `dir`, each as blank metadata, sorted by name.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<TrackMetadata> {
    let mut files: Vec<TrackMetadata> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_audio_file(path, settings) {
            files.push(TrackMetadata::for_path(path));
        }
    }

    sort_by_display(&mut files);
    files
}

/// Expand command-line inputs: directories are scanned, files are taken as
/// given when their extension matches. Duplicates are dropped.
pub fn collect_inputs(inputs: &[PathBuf], settings: &LibrarySettings) -> Vec<TrackMetadata> {
    let mut files: Vec<TrackMetadata> = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(scan(input, settings));
        } else if input.is_file() && is_audio_file(input, settings) {
            files.push(TrackMetadata::for_path(input));
        } else {
            warn!(path = %input.display(), "ignoring input: not a directory or audio file");
        }
    }

    let mut seen = std::collections::HashSet::new();
    files.retain(|f| seen.insert(f.file_path.clone()));
    sort_by_display(&mut files);
    files
}
