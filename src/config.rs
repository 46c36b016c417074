// Configuration file handling

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Style the expected/actual labels in failure messages
    #[serde(default = "default_color")]
    pub color: bool,

    /// Render values with the alternate `{:#?}` form
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            pretty: default_pretty(),
        }
    }
}

// Default values
pub const ENV_EXPECT_COLOR: &str = "EXPECT_COLOR";
pub const CONFIG_FILE_NAME: &str = ".expectrc.toml";

fn default_color() -> bool {
    false
}

fn default_pretty() -> bool {
    true
}

static GLOBAL: Lazy<Config> = Lazy::new(|| {
    let mut config = Config::load().unwrap_or_default();
    if let Some(color) = std::env::var(ENV_EXPECT_COLOR)
        .ok()
        .and_then(|v| parse_flag(&v))
    {
        config.output.color = color;
    }
    config
});

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Process-wide configuration, loaded once on first use
    pub fn global() -> &'static Config {
        &GLOBAL
    }

    /// Load configuration from default locations
    pub fn load() -> Option<Self> {
        // Check locations in order:
        // 1. .expectrc.toml (current directory)
        // 2. ~/.expectrc.toml (home directory)

        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_FILE_NAME));
        }
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
        }

        for path in &paths {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        None
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Option<Self> {
        toml::from_str(content).ok()
    }

    /// Generate configuration as TOML
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_else(|_| String::new())
    }
}
