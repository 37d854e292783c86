use std::collections::HashMap;

use crate::metadata::{TrackMetadata, TrackRecord};

/// What the spreadsheet knows about one file name.
///
/// The two lookups are independent, so `title` and `filename_from_data` may
/// come from different records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordMatch<'a> {
    /// First record whose `"<title>_"` occurs in the file name.
    pub title: Option<&'a TrackRecord>,
    /// First record whose `filename_from_data` occurs in the file name.
    pub filename_from_data: Option<&'a str>,
}

impl RecordMatch<'_> {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.filename_from_data.is_none()
    }
}

/// Match one file name against `records` in record order.
///
/// Comparison is case-insensitive substring search; first match wins.
/// Records with a blank title or blank `filename_from_data` never match the
/// corresponding rule.
pub fn match_file<'a>(records: &'a [TrackRecord], filename: &str) -> RecordMatch<'a> {
    let name = filename.to_lowercase();

    let title = records.iter().find(|r| {
        !r.track_title.is_empty() && name.contains(&format!("{}_", r.track_title.to_lowercase()))
    });

    let filename_from_data = records
        .iter()
        .find(|r| {
            !r.filename_from_data.is_empty()
                && name.contains(&r.filename_from_data.to_lowercase())
        })
        .map(|r| r.filename_from_data.as_str());

    RecordMatch {
        title,
        filename_from_data,
    }
}

/// Match every file name; names with no match at all are left out.
pub fn match_records<'a, S: AsRef<str>>(
    records: &'a [TrackRecord],
    filenames: &[S],
) -> HashMap<String, RecordMatch<'a>> {
    filenames
        .iter()
        .map(|f| (f.as_ref().to_string(), match_file(records, f.as_ref())))
        .filter(|(_, m)| !m.is_empty())
        .collect()
}

/// Fill `meta` from a match. Descriptive fields are reset first, so an
/// unmatched file ends up blank.
pub fn apply_match(meta: &mut TrackMetadata, found: &RecordMatch<'_>) {
    meta.reset_descriptive();
    if let Some(record) = found.title {
        meta.apply_record(record);
    }
    if let Some(name) = found.filename_from_data {
        meta.filename_from_data = name.to_string();
    }
}
