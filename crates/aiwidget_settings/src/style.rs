//! Bot appearance and capabilities

use aiwidget_color::{ColorScheme, HexColor};
use aiwidget_theme::ThemeInputs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ACCENT_COLOR: &str = "#742DDD";
pub const DEFAULT_BOT_MESSAGE_BG_COLOR: &str = "#EEEEEE";

/// Bot style as configured on the dashboard
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotStyle {
    pub theme: ColorScheme,
    #[serde(alias = "accentColor")]
    pub accent_color: HexColor,
    #[serde(alias = "botMessageBGColor")]
    pub bot_message_bg_color: HexColor,
    /// Deprecated dashboard flag; read but never acted on
    #[serde(alias = "autoOpen")]
    pub auto_open: bool,
}

impl Default for BotStyle {
    fn default() -> Self {
        Self {
            theme: ColorScheme::Light,
            accent_color: HexColor::parse(DEFAULT_ACCENT_COLOR)
                .expect("default accent color is a valid hex color"),
            bot_message_bg_color: HexColor::parse(DEFAULT_BOT_MESSAGE_BG_COLOR)
                .expect("default bot message color is a valid hex color"),
            auto_open: false,
        }
    }
}

impl BotStyle {
    /// Theme builder inputs for this style
    pub fn theme_inputs(&self) -> ThemeInputs {
        ThemeInputs::new()
            .with_accent_color(self.accent_color.clone())
            .with_bot_message_bg_color(self.bot_message_bg_color.clone())
    }
}

/// Style overrides supplied by an embedding editor
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub theme: Option<ColorScheme>,
    #[serde(alias = "accentColor")]
    pub accent_color: Option<HexColor>,
    /// Older name for the accent color, used when `accent_color` is absent
    #[serde(alias = "primaryColor")]
    pub primary_color: Option<HexColor>,
    #[serde(alias = "botMessageBGColor")]
    pub bot_message_bg_color: Option<HexColor>,
}

impl StyleOverrides {
    /// Layer the overrides on top of `base`
    pub fn apply(&self, base: &BotStyle) -> BotStyle {
        BotStyle {
            theme: self.theme.unwrap_or(base.theme),
            accent_color: self
                .accent_color
                .as_ref()
                .or(self.primary_color.as_ref())
                .unwrap_or(&base.accent_color)
                .clone(),
            bot_message_bg_color: self
                .bot_message_bg_color
                .clone()
                .unwrap_or_else(|| base.bot_message_bg_color.clone()),
            auto_open: base.auto_open,
        }
    }
}

/// Bot capabilities
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfigs {
    #[serde(alias = "allowImageProcessing")]
    pub allow_image_processing: bool,
}
