use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

/// Write an exported CSV blob to `<dir>/<file_name>`, creating `dir` if needed
pub fn write_export(dir: &Path, file_name: &str, contents: &str) -> std::io::Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, contents)?;
    info!(path = %path.display(), bytes = contents.len(), "Wrote grade export");
    Ok(path)
}

fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
