use std::path::{Path, PathBuf};

use eyre::Result;
use tokio::fs::metadata;
use tracing::debug;

use crate::config::CONFIG_FILE;

/// Find a given file in `start` and its parent directories recursively
pub async fn find_file_in_previous_dirs(filename: &str, start: &Path) -> Result<Option<PathBuf>> {
    let mut current_dir = start.to_path_buf();

    loop {
        // Check if the file exists in the current directory first
        let path = current_dir.join(filename);
        if metadata(&path).await.is_ok_and(|m| m.is_file()) {
            debug!(path = %path.display(), "Found file");
            return Ok(Some(path));
        }

        // Move to the parent directory if the file was not found
        match current_dir.parent() {
            Some(parent_dir) => current_dir = parent_dir.to_path_buf(),
            None => break, // Reached root directory
        }
    }

    Ok(None)
}

/// Find the site configuration file from `start` upwards
pub async fn find_config_file(start: &Path) -> Result<Option<PathBuf>> {
    find_file_in_previous_dirs(CONFIG_FILE, start).await
}
