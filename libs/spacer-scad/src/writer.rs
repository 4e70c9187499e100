//! Persists emitted lines.

use crate::error::{GenerateError, GenerateResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Joins `lines` with `\n` and writes them to `path`, replacing any existing file.
///
/// # Examples
/// ```
/// use spacer_scad::write_document;
/// let path = std::env::temp_dir().join("spacer_writer_doctest.scad");
/// write_document(&["cube(1);".to_string()], &path).unwrap();
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "cube(1);");
/// # std::fs::remove_file(&path).ok();
/// ```
pub fn write_document(lines: &[String], path: &Path) -> GenerateResult<()> {
    fs::write(path, lines.join("\n")).map_err(|source| GenerateError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), lines = lines.len(), "SCAD document written");
    Ok(())
}
