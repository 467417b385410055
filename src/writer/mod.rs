//! Atomic config file writes.
//!
//! # Responsibilities
//! - Replace a file's full contents in one observable step
//!
//! # Design Decisions
//! - Write to a sibling temporary file, then rename over the target; a
//!   reader never sees a partially written document, even across unclean
//!   process termination

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;

/// Replace the file at `path` with `contents`.
pub async fn write_config(path: &Path, contents: &[u8]) -> io::Result<()> {
    let tmp = staging_path(path);
    fs::write(&tmp, contents).await?;
    fs::rename(&tmp, path).await
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "config".into());
    name.push(".tmp");
    path.with_file_name(name)
}
