mod check;
mod init;
mod show;

use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{bail, Result};
use tracing::debug;

pub use check::check;
pub use init::init;
pub use show::show;

/// Uses the given configuration path or searches for one from the current directory upwards
async fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    resolve_config_path_from(path, &current_dir).await
}

async fn resolve_config_path_from(path: Option<PathBuf>, start: &Path) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }

    let Some(path) = paperconf::fs::find_config_file(start).await? else {
        bail!(
            "{}: no {} found in the current directory or its parents",
            "Could not find the site configuration".bold(),
            paperconf::config::CONFIG_FILE
        );
    };
    debug!(path = %path.display(), "Found site configuration");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperconf::config::CONFIG_FILE;

    #[tokio::test]
    async fn test_explicit_path_is_kept() {
        let path = PathBuf::from("/srv/blog/custom.toml");
        let resolved = resolve_config_path_from(Some(path.clone()), Path::new("/"))
            .await
            .unwrap();
        assert_eq!(resolved, path);
    }

    #[tokio::test]
    async fn test_config_found_in_parent() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("content/posts");
        tokio::fs::create_dir_all(&nested).await.unwrap();
        tokio::fs::write(root.path().join(CONFIG_FILE), "").await.unwrap();

        let resolved = resolve_config_path_from(None, &nested).await.unwrap();
        assert_eq!(resolved, root.path().join(CONFIG_FILE));
    }

    #[tokio::test]
    async fn test_config_not_found() {
        let root = tempfile::tempdir().unwrap();

        let err = resolve_config_path_from(None, root.path()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Could not find the site configuration"));
        assert!(message.contains(CONFIG_FILE));
    }
}
