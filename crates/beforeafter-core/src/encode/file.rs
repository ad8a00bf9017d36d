//! Replace-in-one-step file output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Write `bytes` to `path` through a sibling temporary file and a rename.
///
/// The destination either keeps its previous contents or holds the complete
/// new file. The temporary file is removed if writing or renaming fails.
///
/// Returns the number of bytes written.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<u64> {
    write_via_temp(path, |temp| fs::write(temp, bytes))?;
    Ok(bytes.len() as u64)
}

fn write_via_temp<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let temp = temp_path(path);
    debug!(path = %path.display(), temp = %temp.display(), "Writing output");

    let result = write(&temp).and_then(|()| fs::rename(&temp, path));
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
