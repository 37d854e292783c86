use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::Result;

/// Write `bytes` to `dest` via a temporary file in the same directory.
///
/// `finish` runs against the temporary path before it is renamed over
/// `dest`; if it fails the temporary file is removed and `dest` is left
/// as it was. An existing `dest` keeps its permissions.
pub fn persist_atomically<F>(dest: &Path, bytes: &[u8], finish: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    finish(tmp.path())?;

    if let Ok(existing) = fs::metadata(dest) {
        fs::set_permissions(tmp.path(), existing.permissions())?;
    }
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
