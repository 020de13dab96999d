use std::collections::HashMap;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration, read from `satchel.toml`.
///
/// The backend base address is the only functional setting; `[ui.colors]`
/// carries presentation overrides for the theme.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI settings under `[ui]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Color overrides, e.g. `background = "#0C001B"`.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            ui: UiConfig::default(),
        }
    }
}
