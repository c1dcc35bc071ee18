//! AI Widget Theme Builder
//!
//! Builds the complete light/dark theme for the chat widget from two optional
//! inputs: the accent color and the bot message background color.
//!
//! # Overview
//!
//! Every theme leaf ([`ThemeToken`]) resolves one of two ways:
//!
//! - **Input present**: the color itself, one of its ramp steps, or a
//!   white/black label picked from it
//! - **Input absent**: a fixed `var(--sendbird-…)` fallback from [`fallback`]
//!
//! Hover tokens move one ramp step toward the theme's extreme: light themes
//! darken on hover, dark themes lighten background-colored surfaces but still
//! darken accent-colored ones.
//!
//! # Quick Start
//!
//! ```rust
//! use aiwidget_theme::{get_theme, ColorScheme, ThemeInputs, ThemeToken};
//!
//! let inputs = ThemeInputs::parse(Some("#742DDD"), None).unwrap();
//! let bundle = get_theme(&inputs);
//!
//! let light = bundle.for_scheme(ColorScheme::Light);
//! assert_eq!(light.get(ThemeToken::BgOutgoingMessage), "#742DDD");
//! assert_eq!(light.get(ThemeToken::BgIncomingMessage), "var(--sendbird-dark-background-100)");
//! ```

pub mod builder;
pub mod bundle;
pub mod error;
pub mod fallback;
pub mod theme;
pub mod value;

pub use aiwidget_color::{ColorScheme, HexColor};
pub use builder::{get_theme, ThemeInputs};
pub use bundle::ThemeBundle;
pub use error::{Result, ThemeError};
pub use theme::{
    BackgroundColors, BorderColors, BottomBannerColors, HoverColors, TextColors, ThemeToken,
    WidgetTheme,
};
pub use value::{CssVar, TokenValue};
