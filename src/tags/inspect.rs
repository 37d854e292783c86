use std::path::Path;

use lofty::prelude::{Accessor, TaggedFileExt};

use crate::error::Result;

/// Commonly displayed fields of one tag found in a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSummary {
    /// Tag format, e.g. `RiffInfo` or `Id3v2`.
    pub kind: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub comment: Option<String>,
}

/// Read every tag lofty can find in `path`.
pub fn read_tags(path: &Path) -> Result<Vec<TagSummary>> {
    let tagged = lofty::read_from_path(path)?;

    Ok(tagged
        .tags()
        .iter()
        .map(|tag| TagSummary {
            kind: format!("{:?}", tag.tag_type()),
            title: tag.title().map(|v| v.into_owned()),
            artist: tag.artist().map(|v| v.into_owned()),
            album: tag.album().map(|v| v.into_owned()),
            comment: tag.comment().map(|v| v.into_owned()),
        })
        .collect())
}
