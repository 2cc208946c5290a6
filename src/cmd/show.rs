use std::path::PathBuf;

use comfy_table::{presets::UTF8_FULL, Table};
use eyre::Result;
use paperconf::PaperConfig;
use tracing::instrument;

use super::resolve_config_path;

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}

fn site_table(config: &PaperConfig) -> Table {
    let site = &config.site;
    let margin = match site.scheduled_post_margin {
        Some(ms) => format!("{} ms", ms),
        None => "off".to_string(),
    };
    let og_image = match site.og_image_url() {
        Ok(Some(url)) => url.to_string(),
        Ok(None) => "none".to_string(),
        Err(_) => site.og_image.clone(),
    };

    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Site", "Value"]);
    table.add_row(vec!["website".to_string(), site.website.clone()]);
    table.add_row(vec!["author".to_string(), site.author.clone()]);
    table.add_row(vec!["desc".to_string(), site.desc.clone()]);
    table.add_row(vec!["title".to_string(), site.title.clone()]);
    table.add_row(vec!["ogImage".to_string(), og_image]);
    table.add_row(vec![
        "lightAndDarkMode".to_string(),
        yes_no(site.light_and_dark_mode),
    ]);
    table.add_row(vec![
        "postPerPage".to_string(),
        site.post_per_page.to_string(),
    ]);
    table.add_row(vec!["scheduledPostMargin".to_string(), margin]);
    table.add_row(vec!["lang".to_string(), site.lang().to_string()]);
    table.add_row(vec!["langTag".to_string(), site.lang_tags().join(", ")]);
    table
}

fn logo_table(config: &PaperConfig) -> Table {
    let logo = &config.logo;
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Logo", "Value"]);
    table.add_row(vec!["enable".to_string(), yes_no(logo.enable)]);
    table.add_row(vec!["file".to_string(), logo.file_name().to_string()]);
    table.add_row(vec![
        "size".to_string(),
        format!("{}x{}", logo.width, logo.height),
    ]);
    table
}

fn socials_table(config: &PaperConfig) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Name", "Link", "Title", "Active"]);
    for (i, social) in config.socials.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            social.name.clone(),
            social.href.clone(),
            social.title().to_string(),
            yes_no(social.active),
        ]);
    }
    table
}

/// Renders the configuration as tables, socials in display order
pub fn render(config: &PaperConfig) -> String {
    format!(
        "{}\n{}\n{}",
        site_table(config),
        logo_table(config),
        socials_table(config)
    )
}

#[instrument(skip(path))]
pub async fn show(path: Option<PathBuf>) -> Result<String> {
    let path = resolve_config_path(path).await?;
    let config = PaperConfig::load(&path).await?;
    Ok(render(&config))
}
