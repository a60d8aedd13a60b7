//! Output file naming and writing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the output file for a class: `dir/<lowercased class>.rs`.
#[must_use]
pub fn output_path(dir: &Path, class_name: &str) -> PathBuf {
    dir.join(format!("{}.rs", class_name.to_lowercase()))
}

/// Writes a generated document, creating `dir` if needed.
///
/// # Returns
/// The path that was written.
///
/// # Errors
/// Returns an I/O error if the directory cannot be created or the file
/// cannot be written.
pub fn write_output(dir: &Path, class_name: &str, document: &str) -> io::Result<PathBuf> {
    let path = output_path(dir, class_name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, document)?;
    tracing::debug!(path = %path.display(), bytes = document.len(), "wrote document");
    Ok(path)
}
