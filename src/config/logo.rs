use serde::{Deserialize, Serialize};

/// Header logo settings. A disabled logo means the site title is rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogoConfig {
    #[serde(default)]
    pub enable: bool,
    #[serde(default = "default_svg")]
    pub svg: bool,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enable: false,
            svg: default_svg(),
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_svg() -> bool {
    true
}

fn default_width() -> u32 {
    216
}

fn default_height() -> u32 {
    46
}

impl LogoConfig {
    /// Logo file name under the assets directory
    pub fn file_name(&self) -> &'static str {
        if self.svg {
            "logo.svg"
        } else {
            "logo.png"
        }
    }
}
