use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/wavembed/config.toml` or `~/.config/wavembed/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `WAVEMBED__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub embed: EmbedSettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    /// Splice a `LIST/INFO` chunk after `fmt `.
    pub write_riff_info: bool,
    /// Write an ID3 tag chunk.
    pub write_id3: bool,
    /// ID3 version used for the tag chunk.
    pub id3_version: Id3VersionSetting,
    /// Rewrite the outer RIFF size after splicing.
    /// Turning this off reproduces files whose header size is stale.
    pub fix_riff_size: bool,
    /// Drop existing `LIST/INFO` chunks before inserting the new one.
    pub replace_existing_info: bool,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            write_riff_info: true,
            write_id3: true,
            id3_version: Id3VersionSetting::V24,
            fix_riff_size: true,
            replace_existing_info: true,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub enum Id3VersionSetting {
    #[serde(rename = "v2.3", alias = "v23", alias = "id3v23", alias = "2.3")]
    V23,
    #[serde(rename = "v2.4", alias = "v24", alias = "id3v24", alias = "2.4")]
    V24,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as WAV audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["wav".into()],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
        }
    }
}
