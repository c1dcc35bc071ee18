//! Theme resolution
//!
//! Each leaf is either derived from a user color or falls back to a fixed
//! custom property. The decision is made per source color, so every fallback
//! path is visible in `light_theme` and `dark_theme`.

use aiwidget_color::{
    color_based_on_saturation, generate_color_variants, ColorScheme, ColorVariants, HexColor,
    LabelColor, VariantStep,
};
use serde::{Deserialize, Serialize};

use crate::bundle::ThemeBundle;
use crate::error::{Result, ThemeError};
use crate::fallback::{self, dark, light};
use crate::theme::{
    BackgroundColors, BorderColors, BottomBannerColors, HoverColors, TextColors, WidgetTheme,
};
use crate::value::{CssVar, TokenValue};

/// Optional custom colors a theme is built from
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeInputs {
    #[serde(default, rename = "accentColor")]
    pub accent_color: Option<HexColor>,
    #[serde(default, rename = "botMessageBGColor")]
    pub bot_message_bg_color: Option<HexColor>,
}

impl ThemeInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw color strings
    pub fn parse(accent_color: Option<&str>, bot_message_bg_color: Option<&str>) -> Result<Self> {
        Ok(Self {
            accent_color: parse_field("accentColor", accent_color)?,
            bot_message_bg_color: parse_field("botMessageBGColor", bot_message_bg_color)?,
        })
    }

    pub fn with_accent_color(mut self, color: HexColor) -> Self {
        self.accent_color = Some(color);
        self
    }

    pub fn with_bot_message_bg_color(mut self, color: HexColor) -> Self {
        self.bot_message_bg_color = Some(color);
        self
    }
}

fn parse_field(field: &'static str, value: Option<&str>) -> Result<Option<HexColor>> {
    value
        .map(|raw| HexColor::parse(raw).map_err(|source| ThemeError::InvalidColor { field, source }))
        .transpose()
}

/// Build the light and dark theme trees
pub fn get_theme(inputs: &ThemeInputs) -> ThemeBundle {
    let accent = Source::new(inputs.accent_color.as_ref());
    let background = Source::new(inputs.bot_message_bg_color.as_ref());

    tracing::debug!(
        accent = ?inputs.accent_color.as_ref().map(HexColor::as_str),
        bot_message_bg = ?inputs.bot_message_bg_color.as_ref().map(HexColor::as_str),
        "building widget theme"
    );

    ThemeBundle {
        light: light_theme(accent.as_ref(), background.as_ref()),
        dark: dark_theme(accent.as_ref(), background.as_ref()),
    }
}

/// A user color with everything derived from it, computed once per build
struct Source<'a> {
    color: &'a HexColor,
    variants: ColorVariants,
    label: LabelColor,
}

impl<'a> Source<'a> {
    fn new(color: Option<&'a HexColor>) -> Option<Self> {
        color.map(|color| Self {
            color,
            variants: generate_color_variants(color),
            label: color_based_on_saturation(color),
        })
    }
}

/// What a present source contributes to a leaf
#[derive(Clone, Copy)]
enum Derive {
    Color,
    Variant(VariantStep),
    Label,
}

fn resolve(source: Option<&Source<'_>>, derive: Derive, fallback: CssVar) -> TokenValue {
    match source {
        Some(src) => match derive {
            Derive::Color => TokenValue::Color(src.color.clone()),
            Derive::Variant(step) => TokenValue::Color(src.variants[step].clone()),
            Derive::Label => TokenValue::Label(src.label),
        },
        None => TokenValue::Var(fallback),
    }
}

fn fixed(var: CssVar) -> TokenValue {
    TokenValue::Var(var)
}

/// Light mode: hover darkens every surface one step
fn light_theme(accent: Option<&Source<'_>>, background: Option<&Source<'_>>) -> WidgetTheme {
    WidgetTheme {
        scheme: ColorScheme::Light,
        bg_color: BackgroundColors {
            chat_bottom: fixed(light::BACKGROUND_50),
            message_input: fixed(light::BACKGROUND_100),
            incoming_message: resolve(background, Derive::Color, dark::BACKGROUND_100),
            outgoing_message: resolve(accent, Derive::Color, light::PRIMARY_300),
            suggested_reply: fixed(light::BACKGROUND_50),
            bottom_banner: fixed(light::BACKGROUND_50),
            loading_screen: fixed(light::BACKGROUND_50),
            hover: HoverColors {
                incoming_message: resolve(
                    background,
                    Derive::Variant(VariantStep::Darker),
                    light::BACKGROUND_200,
                ),
                outgoing_message: resolve(
                    accent,
                    Derive::Variant(VariantStep::Darker),
                    light::PRIMARY_400,
                ),
                suggested_reply: fixed(light::BACKGROUND_100),
                carousel_button: fixed(light::BACKGROUND_100),
            },
            carousel_item: fixed(light::BACKGROUND_50),
            carousel_button: fixed(light::BACKGROUND_50),
            carousel_button_icon: fixed(light::BACKGROUND_400),
        },
        text_color: TextColors {
            incoming_message: resolve(background, Derive::Label, dark::ONLIGHT_01),
            outgoing_message: resolve(accent, Derive::Label, light::ONDARK_01),
            error_message: fixed(dark::ONLIGHT_01),
            sent_time: fixed(dark::ONLIGHT_03),
            source_info: fixed(light::ONDARK_01),
            suggested_reply: resolve(accent, Derive::Color, light::PRIMARY_300),
            bottom_banner: BottomBannerColors {
                powered_by: TokenValue::Literal(fallback::LIGHT_POWERED_BY),
                logo: TokenValue::Literal(fallback::LIGHT_LOGO),
            },
            carousel_item: fixed(light::ONLIGHT_01),
        },
        border_color: BorderColors {
            channel_header: fixed(light::ONLIGHT_04),
            carousel_item: fixed(light::ONLIGHT_04),
        },
        accent_color: resolve(accent, Derive::Color, light::PRIMARY_300),
    }
}

/// Dark mode: hover lightens background-colored surfaces, darkens accent ones
fn dark_theme(accent: Option<&Source<'_>>, background: Option<&Source<'_>>) -> WidgetTheme {
    WidgetTheme {
        scheme: ColorScheme::Dark,
        bg_color: BackgroundColors {
            chat_bottom: fixed(dark::BACKGROUND_600),
            message_input: fixed(dark::BACKGROUND_500),
            incoming_message: resolve(background, Derive::Color, dark::BACKGROUND_500),
            outgoing_message: resolve(accent, Derive::Color, dark::PRIMARY_200),
            suggested_reply: fixed(dark::BACKGROUND_600),
            bottom_banner: fixed(dark::BACKGROUND_600),
            loading_screen: fixed(dark::BACKGROUND_600),
            hover: HoverColors {
                incoming_message: resolve(
                    background,
                    Derive::Variant(VariantStep::Lighter),
                    dark::BACKGROUND_400,
                ),
                outgoing_message: resolve(
                    accent,
                    Derive::Variant(VariantStep::Darker),
                    dark::PRIMARY_300,
                ),
                suggested_reply: fixed(dark::BACKGROUND_500),
                carousel_button: fixed(dark::BACKGROUND_500),
            },
            carousel_item: fixed(dark::BACKGROUND_500),
            carousel_button: fixed(dark::BACKGROUND_400),
            carousel_button_icon: fixed(dark::BACKGROUND_50),
        },
        text_color: TextColors {
            incoming_message: resolve(background, Derive::Label, dark::ONDARK_01),
            outgoing_message: resolve(accent, Derive::Label, dark::ONLIGHT_01),
            error_message: fixed(dark::ONDARK_01),
            sent_time: fixed(dark::ONDARK_03),
            source_info: fixed(light::ONDARK_01),
            suggested_reply: resolve(accent, Derive::Color, dark::PRIMARY_200),
            bottom_banner: BottomBannerColors {
                powered_by: fixed(dark::BACKGROUND_200),
                logo: fixed(dark::BACKGROUND_50),
            },
            carousel_item: fixed(dark::ONDARK_01),
        },
        border_color: BorderColors {
            channel_header: fixed(dark::ONDARK_04),
            carousel_item: fixed(dark::ONDARK_04),
        },
        accent_color: resolve(accent, Derive::Color, dark::PRIMARY_200),
    }
}
