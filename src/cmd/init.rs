use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{eyre, Result, WrapErr};
use indoc::formatdoc;
use paperconf::config::{defaults, CONFIG_FILE};
use tokio::fs;
use tracing::{debug, info, instrument};

/// Render the initial configuration file contents
fn render_config(author: &str) -> Result<String> {
    let mut config = defaults().clone();
    config.site.author = author.to_string();

    let header = formatdoc!(
        r#"
        # Site configuration for {}.
        # scheduledPostMargin is in milliseconds, remove it to publish posts exactly on time.
        "#,
        author
    );
    Ok(format!("{}\n{}", header, config.to_toml_string()?))
}

#[instrument(skip(author))]
pub async fn init(dir: &Path, author: Option<String>, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE);

    if fs::try_exists(&config_path).await? && !force {
        let path = fs::canonicalize(&config_path).await?;
        return Err(
            eyre!("The file {} already exists.", path.display())
                .wrap_err("Could not initialize the site configuration".bold()),
        );
    }

    debug!(dir = %dir.display(), "Creating configuration directory");
    fs::create_dir_all(dir)
        .await
        .wrap_err_with(|| format!("Could not create {}", dir.display()))?;

    let author = author.unwrap_or_else(whoami::username);
    fs::write(&config_path, render_config(&author)?).await?;

    // Get the canonical (absolute) path to the new configuration
    let path = fs::canonicalize(&config_path).await?;
    info!(
        "Created site configuration for {} in {}",
        author.bold(),
        path.display()
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperconf::{schema::validate_config, PaperConfig};

    #[tokio::test]
    async fn test_init_writes_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let site_dir = dir.path().join("my-blog");

        let path = init(&site_dir, Some("Jane".to_string()), false).await.unwrap();
        let config = PaperConfig::load(&path).await.unwrap();

        assert_eq!(config.site.author, "Jane");
        assert_eq!(config.site.title, defaults().site.title);
        assert_eq!(config.socials, defaults().socials);
        assert!(validate_config(&config).is_empty());

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(content.starts_with("# Site configuration for Jane."));
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&config_path, "keep me").await.unwrap();

        let err = init(dir.path(), Some("Jane".to_string()), false)
            .await
            .unwrap_err();
        assert!(format!("{:?}", err).contains("already exists"));
        assert_eq!(tokio::fs::read_to_string(&config_path).await.unwrap(), "keep me");

        init(dir.path(), Some("Jane".to_string()), true).await.unwrap();
        let config = PaperConfig::load(&config_path).await.unwrap();
        assert_eq!(config.site.author, "Jane");
    }
}
