//! AI Widget Color Engine
//!
//! Turns one user-supplied accent color into the numeric material the theme
//! builder needs.
//!
//! # Overview
//!
//! - **Conversion**: hex ⟷ RGB ⟷ HSL ([`hex_to_rgb`], [`rgb_to_hex`],
//!   [`rgb_to_hsl`], [`hsl_to_rgb`])
//! - **Variants**: a fixed 5-step tint/shade ramp ([`generate_color_variants`])
//! - **Contrast**: white or black label text for a colored surface
//!   ([`color_based_on_saturation`])
//! - **CSS variables**: `--sendbird-<scheme>-primary-<step>` custom properties
//!   ([`generate_css_variables`])
//!
//! # Quick Start
//!
//! ```rust
//! use aiwidget_color::{generate_color_variants, HexColor, VariantStep};
//!
//! let accent: HexColor = "#742DDD".parse().unwrap();
//! let ramp = generate_color_variants(&accent);
//!
//! assert_eq!(ramp[VariantStep::Base], accent);
//! assert_eq!(ramp.iter().count(), 5);
//! ```
//!
//! # Validation
//!
//! Every string enters the engine through [`HexColor::parse`]. Malformed input
//! fails there with [`ColorError::InvalidFormat`]; everything downstream works on
//! validated colors and cannot fail.

pub mod contrast;
pub mod css;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod scheme;
pub mod variants;

pub use contrast::{color_based_on_saturation, LabelColor};
pub use css::{generate_css_variables, primary_variable_name, CssVariables};
pub use error::{ColorError, Result};
pub use hex::{hex_to_rgb, rgb_to_hex, HexColor, Rgb};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use scheme::ColorScheme;
pub use variants::{adjust_color, generate_color_variants, ColorVariants, VariantStep};
