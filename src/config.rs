use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

mod logo;
mod socials;

pub use logo::LogoConfig;
pub use socials::SocialLink;

/// Name of the configuration file looked up in a site root
pub const CONFIG_FILE: &str = "paperconf.toml";

/// Language used by consumers when the locale does not set one
pub const FALLBACK_LANG: &str = "en";

static DEFAULTS: LazyLock<PaperConfig> = LazyLock::new(PaperConfig::builtin);

/// Built-in site configuration, initialized once and shared for the whole process.
pub fn defaults() -> &'static PaperConfig {
    &DEFAULTS
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Locale {
    #[serde(default)]
    pub lang: String,
    #[serde(default, rename = "langTag")]
    pub lang_tag: Vec<String>,
}

/// Identity and display behavior of the blog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub og_image: String,
    #[serde(default = "default_light_and_dark_mode")]
    pub light_and_dark_mode: bool,
    #[serde(default = "default_post_per_page")]
    pub post_per_page: u32,
    /// Milliseconds before its publish time at which a scheduled post becomes visible
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_post_margin: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
}

fn default_light_and_dark_mode() -> bool {
    true
}

fn default_post_per_page() -> u32 {
    7
}

impl SiteConfig {
    /// Scheduled-post margin as a duration, `None` when the feature is off
    pub fn scheduled_post_margin(&self) -> Option<chrono::Duration> {
        self.scheduled_post_margin
            .and_then(|ms| i64::try_from(ms).ok())
            .and_then(chrono::Duration::try_milliseconds)
    }

    /// Whether a post scheduled at `publish_at` is visible at `now`
    pub fn is_published(
        &self,
        publish_at: chrono::DateTime<chrono::Utc>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> bool {
        crate::posts::is_published(publish_at, now, self.scheduled_post_margin())
    }

    /// Number of listing pages needed for `total_posts`
    pub fn page_count(&self, total_posts: usize) -> usize {
        crate::posts::page_count(total_posts, self.post_per_page)
    }

    /// Indices of the posts listed on the 1-based `page`
    pub fn page_range(&self, page: usize, total_posts: usize) -> Range<usize> {
        crate::posts::page_range(page, total_posts, self.post_per_page)
    }

    /// Site language, falling back to [`FALLBACK_LANG`] when unset or empty
    pub fn lang(&self) -> &str {
        match &self.locale {
            Some(locale) if !locale.lang.is_empty() => &locale.lang,
            _ => FALLBACK_LANG,
        }
    }

    /// Language tags used for date formatting, falling back to the site language
    pub fn lang_tags(&self) -> Vec<&str> {
        match &self.locale {
            Some(locale) if !locale.lang_tag.is_empty() => {
                locale.lang_tag.iter().map(String::as_str).collect()
            }
            _ => vec![self.lang()],
        }
    }

    /// Absolute URL of the social-preview image, `None` if no image is configured.
    ///
    /// The website is treated as a directory even when its trailing slash is missing,
    /// so `https://example.org/blog` + `og.jpg` gives `https://example.org/blog/og.jpg`.
    pub fn og_image_url(&self) -> Result<Option<Url>, url::ParseError> {
        if self.og_image.is_empty() {
            return Ok(None);
        }

        let mut base = Url::parse(&self.website)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(&self.og_image).map(Some)
    }
}

/// Contents of a `paperconf.toml` file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PaperConfig {
    pub site: SiteConfig,
    #[serde(default)]
    pub logo: LogoConfig,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

impl Default for PaperConfig {
    fn default() -> Self {
        defaults().clone()
    }
}

impl PaperConfig {
    fn builtin() -> Self {
        Self {
            site: SiteConfig {
                website: String::from("https://astro-paper.pages.dev/"),
                author: String::from("Telmar"),
                desc: String::from("A blog on code and TTRPG by telmar."),
                title: String::from("Telmar"),
                og_image: String::from("astropaper-og.jpg"),
                light_and_dark_mode: true,
                post_per_page: 7,
                scheduled_post_margin: Some(15 * 60 * 1000),
                locale: Some(Locale {
                    lang: String::from("en"),
                    lang_tag: vec![String::from("en-EN")],
                }),
            },
            logo: LogoConfig::default(),
            socials: vec![SocialLink {
                name: String::from("Github"),
                href: String::from("https://github.com/gheritarish"),
                link_title: String::from("My personal GitHub account"),
                active: true,
            }],
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).wrap_err("Invalid site configuration")?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).wrap_err("Failed to serialize site configuration")
    }

    /// Reads and parses a configuration file
    #[instrument(skip(path), fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self> {
        debug!("Loading site configuration");
        let content = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("Could not read {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .wrap_err_with(|| format!("Could not load {}", path.display()))?;
        debug!(socials = config.socials.len(), "Site configuration loaded");
        Ok(config)
    }

    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn save(&self, path: &Path) -> Result<()> {
        debug!("Saving site configuration");
        let content = self.to_toml_string()?;
        tokio::fs::write(path, content)
            .await
            .wrap_err_with(|| format!("Could not write {}", path.display()))
    }

    /// Socials shown in the site UI, in display order
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|social| social.active)
    }
}
