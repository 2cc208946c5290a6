//! Typed site configuration for a static blog.
//!
//! The configuration is a read-only record loaded once at startup, either the
//! built-in [`config::defaults`] or a `paperconf.toml` file loaded with
//! [`config::PaperConfig::load`], and checked with [`schema::validate_config`].

pub mod config;
pub mod fs;
pub mod posts;
pub mod schema;

pub use config::{LogoConfig, PaperConfig, SiteConfig, SocialLink};
