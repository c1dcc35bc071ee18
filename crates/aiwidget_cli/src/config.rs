//! widget.toml handling

use aiwidget_settings::{BotStyle, WidgetConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "widget.toml";

/// Top-level widget configuration (widget.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WidgetFileConfig {
    /// Bot style used when no color flags are given
    #[serde(default)]
    pub style: BotStyle,
    /// Application and bot identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetConfig>,
}

impl WidgetFileConfig {
    /// Load configuration from a file, or from `widget.toml` inside a directory
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE_NAME)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `aiwidget init-config` to create one.",
                CONFIG_FILE_NAME,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: WidgetFileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        if let Some(widget) = &config.widget {
            widget
                .validate()
                .with_context(|| format!("Invalid [widget] section in {}", config_path.display()))?;
        }

        tracing::debug!(path = %config_path.display(), "loaded widget config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiwidget_color::ColorScheme;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_round_trip() {
        let toml = WidgetFileConfig::default().to_toml().unwrap();
        assert!(toml.contains("[style]"));
        assert!(toml.contains("#742DDD"));

        let parsed: WidgetFileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.style, BotStyle::default());
        assert!(parsed.widget.is_none());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r##"
[style]
theme = "dark"
accent_color = "#0055FF"

[widget]
application_id = "app"
bot_id = "bot"
"##,
        )
        .unwrap();

        let config = WidgetFileConfig::load_from_path(dir.path()).unwrap();
        assert_eq!(config.style.theme, ColorScheme::Dark);
        assert_eq!(config.style.accent_color, "#0055FF");
        assert_eq!(config.style.bot_message_bg_color, "#EEEEEE");
        assert_eq!(config.widget.unwrap().bot_id, "bot");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = WidgetFileConfig::load_from_path(dir.path()).unwrap_err();
        assert!(err.to_string().contains("init-config"));
    }

    #[test]
    fn test_bad_color_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[style]\naccent_color = \"violet\"\n").unwrap();

        let err = WidgetFileConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_blank_widget_identity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[widget]\napplication_id = \"\"\nbot_id = \"bot\"\n").unwrap();

        assert!(WidgetFileConfig::load_from_path(&path).is_err());
    }
}
