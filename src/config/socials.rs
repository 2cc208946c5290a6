use serde::{Deserialize, Serialize};

/// Outbound profile link shown in the site UI
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub href: String,
    /// Accessible title, also used as the link tooltip
    #[serde(default, rename = "linkTitle")]
    pub link_title: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl SocialLink {
    /// Title to render for the link, the platform name when no title is set
    pub fn title(&self) -> &str {
        if self.link_title.is_empty() {
            &self.name
        } else {
            &self.link_title
        }
    }
}
