//! Shared filesystem helpers used by the scaffolder and the commands.

use crate::errors::CbtError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Writes `content` to a file that must not exist yet.
///
/// An existing file is reported as [`CbtError::AlreadyExists`] and left untouched.
pub fn write_new_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), CbtError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| CbtError::from_io_with_context(e, path.to_path_buf()))?;
    file.write_all(content.as_bytes())
        .map_err(|e| CbtError::from_io_with_context(e, path.to_path_buf()))
}

/// Returns true when `dir` holds a `project.cfg` plus `headers/` and `src/`.
pub fn is_workspace<P: AsRef<Path>>(dir: P) -> bool {
    let dir = dir.as_ref();
    dir.join("project.cfg").is_file() && dir.join("headers").is_dir() && dir.join("src").is_dir()
}
