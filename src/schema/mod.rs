use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

mod validator;

pub use validator::validate_config;

static LANGUAGE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{1,8})*$")
        .expect("language tag pattern should compile")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(String),
    ConstraintViolation { field: String, message: String },
}

impl ValidationError {
    pub fn with_field(&mut self, field: String) -> &Self {
        match self {
            Self::MissingField(f) => *f = field,
            Self::ConstraintViolation { field: f, .. } => *f = field,
        }
        self
    }

    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) => field,
            Self::ConstraintViolation { field, .. } => field,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing field '{}'", field),
            Self::ConstraintViolation { field, message } => {
                write!(f, "Constraint violation for field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Constraints a string field of the configuration can be checked against
#[derive(Clone, Copy, Debug)]
pub enum Constraint {
    /// Non-empty value
    Required,
    /// Absolute URL using one of the given schemes
    Url { schemes: &'static [&'static str] },
    /// Path relative to the assets directory, never escaping it
    RelativeAsset,
    /// Language tag such as `en` or `en-US`, empty values are skipped
    LanguageTag,
}

pub const WEB_SCHEMES: &[&str] = &["http", "https"];
pub const LINK_SCHEMES: &[&str] = &["http", "https", "mailto"];

impl Constraint {
    /// Checks a value, the returned error has no field name set yet
    pub fn check(&self, value: &str) -> Result<(), ValidationError> {
        match self {
            Constraint::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::MissingField(String::new()));
                }
                Ok(())
            }
            Constraint::Url { schemes } => {
                if value.is_empty() {
                    return Ok(());
                }
                let url = Url::parse(value).map_err(|e| ValidationError::ConstraintViolation {
                    field: String::new(),
                    message: format!("'{}' is not a valid URL ({})", value, e),
                })?;
                if !schemes.iter().any(|scheme| *scheme == url.scheme()) {
                    return Err(ValidationError::ConstraintViolation {
                        field: String::new(),
                        message: format!(
                            "Unsupported URL scheme '{}' (expected one of {})",
                            url.scheme(),
                            schemes.join(", ")
                        ),
                    });
                }
                Ok(())
            }
            Constraint::RelativeAsset => {
                let path = Path::new(value);
                let escapes = path.components().any(|c| {
                    matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_))
                });
                if escapes || value.contains("://") {
                    return Err(ValidationError::ConstraintViolation {
                        field: String::new(),
                        message: format!(
                            "'{}' must be a path relative to the assets directory",
                            value
                        ),
                    });
                }
                Ok(())
            }
            Constraint::LanguageTag => {
                if !value.is_empty() && !LANGUAGE_TAG.is_match(value) {
                    return Err(ValidationError::ConstraintViolation {
                        field: String::new(),
                        message: format!("'{}' is not a valid language tag", value),
                    });
                }
                Ok(())
            }
        }
    }
}

pub fn format_errors(file_path: &Path, errors: &[ValidationError], as_warnings: bool) -> String {
    let mut output = format!(
        "{}: Validation {} for '{}'\n",
        if as_warnings { "Warning" } else { "Error" },
        if as_warnings { "issues" } else { "failed" },
        file_path.display()
    );
    for error in errors {
        output.push_str(&format!("  → {}\n", error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(Constraint::Required.check("Telmar").is_ok());
        assert!(matches!(
            Constraint::Required.check("  "),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn test_url() {
        let web = Constraint::Url { schemes: WEB_SCHEMES };
        assert!(web.check("https://github.com/gheritarish").is_ok());
        assert!(web.check("github.com/gheritarish").is_err());
        assert!(web.check("ftp://example.org/").is_err());

        let link = Constraint::Url { schemes: LINK_SCHEMES };
        assert!(link.check("mailto:me@example.org").is_ok());
    }

    #[test]
    fn test_relative_asset() {
        assert!(Constraint::RelativeAsset.check("astropaper-og.jpg").is_ok());
        assert!(Constraint::RelativeAsset.check("img/og.jpg").is_ok());
        assert!(Constraint::RelativeAsset.check("../og.jpg").is_err());
        assert!(Constraint::RelativeAsset.check("/og.jpg").is_err());
        assert!(Constraint::RelativeAsset.check("https://cdn.example.org/og.jpg").is_err());
    }

    #[test]
    fn test_language_tag() {
        for tag in ["en", "en-EN", "zh-Hant-TW", ""] {
            assert!(Constraint::LanguageTag.check(tag).is_ok(), "{tag}");
        }
        for tag in ["english", "en_US", "e"] {
            assert!(Constraint::LanguageTag.check(tag).is_err(), "{tag}");
        }
    }

    #[test]
    fn test_with_field() {
        let mut err = Constraint::Required.check("").unwrap_err();
        err.with_field("site.title".to_string());
        assert_eq!(err, ValidationError::MissingField("site.title".to_string()));
        assert_eq!(err.field(), "site.title");
    }

    #[test]
    fn test_format_errors() {
        let errors = vec![
            ValidationError::MissingField("site.author".to_string()),
            ValidationError::ConstraintViolation {
                field: "site.postPerPage".to_string(),
                message: "Must be at least 1".to_string(),
            },
        ];
        let report = format_errors(Path::new("paperconf.toml"), &errors, false);
        assert!(report.starts_with("Error: Validation failed for 'paperconf.toml'"));
        assert!(report.contains("  → Missing field 'site.author'"));
        assert!(report.contains("site.postPerPage"));

        let report = format_errors(Path::new("paperconf.toml"), &errors, true);
        assert!(report.starts_with("Warning: Validation issues"));
    }
}
