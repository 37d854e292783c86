use std::path::Path;

use id3::frame::Comment;
use id3::{Tag, TagLike, Version};

use crate::config::Id3VersionSetting;
use crate::error::Result;
use crate::metadata::{TrackMetadata, comment_text, present, split_credits};

/// Something that can write a tag set for `meta` into the WAV at `path`.
pub trait TagWriter {
    fn write_tags(&self, path: &Path, meta: &TrackMetadata) -> Result<()>;
}

/// Writes an ID3 chunk into WAV files, replacing any existing one.
#[derive(Debug, Clone, Copy)]
pub struct Id3TagWriter {
    version: Version,
}

impl Id3TagWriter {
    pub fn new(version: Version) -> Self {
        Self { version }
    }

    pub fn from_setting(setting: Id3VersionSetting) -> Self {
        match setting {
            Id3VersionSetting::V23 => Self::new(Version::Id3v23),
            Id3VersionSetting::V24 => Self::new(Version::Id3v24),
        }
    }
}

impl Default for Id3TagWriter {
    fn default() -> Self {
        Self::new(Version::Id3v24)
    }
}

impl TagWriter for Id3TagWriter {
    fn write_tags(&self, path: &Path, meta: &TrackMetadata) -> Result<()> {
        build_id3_tag(meta).write_to_path(path, self.version)?;
        Ok(())
    }
}

/// TBPM wants an integer; numeric text is rounded, anything else is kept.
pub fn tempo_text(bpm: &str) -> String {
    match bpm.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => format!("{}", n.round() as i64),
        _ => bpm.to_string(),
    }
}

/// Build a fresh tag for `meta`. Blank fields produce no frame.
pub fn build_id3_tag(meta: &TrackMetadata) -> Tag {
    let mut tag = Tag::new();

    if let Some(v) = present(&meta.track_title) {
        tag.set_title(v);
    }
    if let Some(v) = present(&meta.composers) {
        tag.set_artist(v);
    }
    if let Some(v) = present(&meta.source_program) {
        tag.set_album(v);
    }
    if let Some(v) = present(&meta.bpm) {
        tag.set_text("TBPM", tempo_text(v));
    }
    if let Some(v) = present(&meta.key) {
        tag.set_text("TKEY", v);
    }

    if let Some(text) = comment_text(meta) {
        let _ = tag.add_frame(Comment {
            lang: "eng".to_string(),
            description: "Description".to_string(),
            text,
        });
    }

    // One value per credited name.
    let composers = split_credits(&meta.composers);
    if !composers.is_empty() {
        tag.set_text_values("TCOM", composers);
    }
    let publishers = split_credits(&meta.publishers);
    if !publishers.is_empty() {
        tag.set_text_values("TPUB", publishers);
    }

    tag
}
