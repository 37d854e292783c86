use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

/// One decoded spreadsheet row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub filename_from_data: String,
    pub track_title: String,
    pub source_program: String,
    pub bpm: String,
    pub key: String,
    pub writers: Vec<String>,
    pub publishers: Vec<String>,
}

impl TrackRecord {
    /// Writers as a single display string.
    pub fn composers(&self) -> String {
        self.writers.join(", ")
    }

    /// Publishers as a single display string.
    pub fn publishers_display(&self) -> String {
        self.publishers.join(", ")
    }
}

/// Metadata for a single WAV file.
///
/// Every field defaults to the empty string and an empty field is never
/// written. The JSON form accepts both snake_case keys and the column labels
/// used by the data exports ("Track Title", "Source Program", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackMetadata {
    #[serde(alias = "File Path")]
    pub file_path: PathBuf,
    #[serde(alias = "Uploaded Audio")]
    pub display_name: String,
    #[serde(alias = "Filename From Data")]
    pub filename_from_data: String,
    #[serde(alias = "Track Title")]
    pub track_title: String,
    #[serde(alias = "Source Program")]
    pub source_program: String,
    #[serde(alias = "BPM", deserialize_with = "text_or_number")]
    pub bpm: String,
    #[serde(alias = "Key")]
    pub key: String,
    #[serde(alias = "Composers")]
    pub composers: String,
    #[serde(alias = "Publishers")]
    pub publishers: String,
}

impl TrackMetadata {
    /// Blank metadata for a file on disk; the display name is the file name.
    pub fn for_path(path: &Path) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_path: path.to_path_buf(),
            display_name,
            ..Self::default()
        }
    }

    /// Copy the descriptive fields of a title-matched record.
    pub fn apply_record(&mut self, record: &TrackRecord) {
        self.track_title = record.track_title.clone();
        self.source_program = record.source_program.clone();
        self.bpm = record.bpm.clone();
        self.key = record.key.clone();
        self.composers = record.composers();
        self.publishers = record.publishers_display();
    }

    /// Clear the fields a spreadsheet match can populate.
    pub fn reset_descriptive(&mut self) {
        self.track_title.clear();
        self.source_program.clear();
        self.bpm.clear();
        self.key.clear();
        self.composers.clear();
        self.publishers.clear();
    }

    /// Names of descriptive fields that are still blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Track Title", &self.track_title),
            ("Source Program", &self.source_program),
            ("BPM", &self.bpm),
            ("Key", &self.key),
            ("Composers", &self.composers),
            ("Publishers", &self.publishers),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// `Some(v)` for a non-empty field; empty and absent are the same thing.
pub fn present(v: &str) -> Option<&str> {
    if v.is_empty() { None } else { Some(v) }
}

/// Accept `"120"` as well as a bare `120` or `120.5` for text fields that are
/// often numeric in hand-written JSON.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
    })
}
