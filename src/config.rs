//! User configuration — listing command, colours, and layout constants.
//!
//! Settings are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/dotls/config.toml` (default `~/.config/dotls/config.toml`).
//! The file is optional and never written by the program.

use std::path::PathBuf;

use crate::core::layout::DEFAULT_PADDING;
use crate::ui::terminal::FALLBACK_WIDTH;
use crate::ui::theme::{Theme, DEFAULT_HIDDEN_DIR, DEFAULT_HIDDEN_FILE};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Program used as the listing source.
    pub command: String,
    /// Palette name for hidden directories.
    pub hidden_dir_color: String,
    /// Palette name for uncoloured hidden files.
    pub hidden_file_color: String,
    /// Spaces between columns.
    pub padding: usize,
    /// Width assumed when the terminal can't be queried.
    pub fallback_width: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            command: "ls".to_string(),
            hidden_dir_color: DEFAULT_HIDDEN_DIR.to_string(),
            hidden_file_color: DEFAULT_HIDDEN_FILE.to_string(),
            padding: DEFAULT_PADDING,
            fallback_width: FALLBACK_WIDTH,
        }
    }
}

impl AppConfig {
    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loaded config");
                Self::parse(&contents)
            }
            Err(_) => Self::default(),
        }
    }

    /// Resolve the configured colour names against the palette.
    pub fn theme(&self) -> Theme {
        Theme::from_names(&self.hidden_dir_color, &self.hidden_file_color)
    }

    fn parse(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "command" if !value.is_empty() => config.command = value.to_string(),
                "hidden_dir_color" => config.hidden_dir_color = value.to_string(),
                "hidden_file_color" => config.hidden_file_color = value.to_string(),
                "padding" => {
                    if let Ok(v) = value.parse::<usize>() {
                        config.padding = v.clamp(1, 8);
                    }
                }
                "fallback_width" => {
                    if let Ok(v) = value.parse::<usize>() {
                        if v > 0 {
                            config.fallback_width = v;
                        }
                    }
                }
                _ => {}
            }
        }

        config
    }
}

/// Return the config file path (`$XDG_CONFIG_HOME/dotls/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join(env!("CARGO_PKG_NAME")).join("config.toml")
}
