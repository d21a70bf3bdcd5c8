//! Benchmark corpus enumeration.
//!
//! [`create_file_list`] turns the harness inputs (directories and plain files)
//! into a sorted, flat list of regular files.  Directories are read one level
//! deep by default; with `recursive` set they are walked to any depth using
//! [`walkdir`].
//!
//! Symlinks are never followed during traversal: `walkdir` keeps its default
//! `follow_links(false)`, so symlink entries report a symlink `file_type()` and
//! are left out.  A path given directly as an input is forwarded as-is.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Expand `inputs` into the regular files to benchmark, in path order.
///
/// If any directory entry cannot be read, enumeration stops and the error is
/// returned.  An empty result is not an error.
pub fn create_file_list(inputs: &[&Path], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut walker = WalkDir::new(input).sort_by_file_name();
            if !recursive {
                walker = walker.max_depth(1);
            }
            for entry in walker {
                let entry = entry.map_err(|e| {
                    e.io_error()
                        .map(|io| io::Error::new(io.kind(), io.to_string()))
                        .unwrap_or_else(|| io::Error::other(e.to_string()))
                })?;
                if entry.file_type().is_file() {
                    result.push(entry.into_path());
                }
            }
        } else {
            result.push(input.to_path_buf());
        }
    }
    Ok(result)
}
