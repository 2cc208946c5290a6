use crate::config::PaperConfig;
use crate::schema::{Constraint, ValidationError, LINK_SCHEMES, WEB_SCHEMES};

fn check_field(
    errors: &mut Vec<ValidationError>,
    field: &str,
    value: &str,
    constraints: &[Constraint],
) {
    for constraint in constraints {
        if let Err(mut e) = constraint.check(value) {
            e.with_field(field.to_string());
            errors.push(e);
            // Later constraints assume the earlier ones held
            break;
        }
    }
}

fn check_positive(errors: &mut Vec<ValidationError>, field: &str, value: u32) {
    if value == 0 {
        errors.push(ValidationError::ConstraintViolation {
            field: field.to_string(),
            message: "Must be a positive integer".to_string(),
        });
    }
}

/// Collects every issue found in the configuration, an empty list means it is valid
pub fn validate_config(config: &PaperConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let site = &config.site;

    check_field(
        &mut errors,
        "site.website",
        &site.website,
        &[Constraint::Required, Constraint::Url { schemes: WEB_SCHEMES }],
    );
    check_field(&mut errors, "site.author", &site.author, &[Constraint::Required]);
    check_field(&mut errors, "site.title", &site.title, &[Constraint::Required]);
    check_field(
        &mut errors,
        "site.ogImage",
        &site.og_image,
        &[Constraint::RelativeAsset],
    );
    check_positive(&mut errors, "site.postPerPage", site.post_per_page);

    if let Some(locale) = &site.locale {
        check_field(
            &mut errors,
            "site.locale.lang",
            &locale.lang,
            &[Constraint::LanguageTag],
        );
        for (i, tag) in locale.lang_tag.iter().enumerate() {
            check_field(
                &mut errors,
                &format!("site.locale.langTag[{}]", i),
                tag,
                &[Constraint::Required, Constraint::LanguageTag],
            );
        }
    }

    check_positive(&mut errors, "logo.width", config.logo.width);
    check_positive(&mut errors, "logo.height", config.logo.height);

    // Inactive socials are not rendered, so their links are allowed to be placeholders
    for (i, social) in config.socials.iter().enumerate() {
        check_field(
            &mut errors,
            &format!("socials[{}].name", i),
            &social.name,
            &[Constraint::Required],
        );
        if social.active {
            check_field(
                &mut errors,
                &format!("socials[{}].href", i),
                &social.href,
                &[Constraint::Required, Constraint::Url { schemes: LINK_SCHEMES }],
            );
        }
    }

    errors
}
