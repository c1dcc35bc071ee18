//! Fallback values used when the widget has no custom colors
//!
//! These point at custom properties the host stylesheet defines for each
//! appearance mode. Light themes borrow a few `dark-*` properties for text and
//! incoming-message surfaces.

use crate::value::CssVar;

/// `--sendbird-light-*` properties
pub mod light {
    use crate::value::CssVar;

    // Backgrounds
    pub const BACKGROUND_50: CssVar = CssVar::new("--sendbird-light-background-50");
    pub const BACKGROUND_100: CssVar = CssVar::new("--sendbird-light-background-100");
    pub const BACKGROUND_200: CssVar = CssVar::new("--sendbird-light-background-200");
    pub const BACKGROUND_400: CssVar = CssVar::new("--sendbird-light-background-400");

    // Primary ramp
    pub const PRIMARY_300: CssVar = CssVar::new("--sendbird-light-primary-300");
    pub const PRIMARY_400: CssVar = CssVar::new("--sendbird-light-primary-400");

    // Text and borders
    pub const ONDARK_01: CssVar = CssVar::new("--sendbird-light-ondark-01");
    pub const ONLIGHT_01: CssVar = CssVar::new("--sendbird-light-onlight-01");
    pub const ONLIGHT_04: CssVar = CssVar::new("--sendbird-light-onlight-04");
}

/// `--sendbird-dark-*` properties
pub mod dark {
    use crate::value::CssVar;

    // Backgrounds
    pub const BACKGROUND_50: CssVar = CssVar::new("--sendbird-dark-background-50");
    pub const BACKGROUND_100: CssVar = CssVar::new("--sendbird-dark-background-100");
    pub const BACKGROUND_200: CssVar = CssVar::new("--sendbird-dark-background-200");
    pub const BACKGROUND_400: CssVar = CssVar::new("--sendbird-dark-background-400");
    pub const BACKGROUND_500: CssVar = CssVar::new("--sendbird-dark-background-500");
    pub const BACKGROUND_600: CssVar = CssVar::new("--sendbird-dark-background-600");

    // Primary ramp
    pub const PRIMARY_200: CssVar = CssVar::new("--sendbird-dark-primary-200");
    pub const PRIMARY_300: CssVar = CssVar::new("--sendbird-dark-primary-300");

    // Text and borders
    pub const ONLIGHT_01: CssVar = CssVar::new("--sendbird-dark-onlight-01");
    pub const ONLIGHT_03: CssVar = CssVar::new("--sendbird-dark-onlight-03");
    pub const ONDARK_01: CssVar = CssVar::new("--sendbird-dark-ondark-01");
    pub const ONDARK_03: CssVar = CssVar::new("--sendbird-dark-ondark-03");
    pub const ONDARK_04: CssVar = CssVar::new("--sendbird-dark-ondark-04");
}

/// Bottom banner "powered by" text in light mode
pub const LIGHT_POWERED_BY: &str = "#5E5E5E";

/// Bottom banner logo in light mode
pub const LIGHT_LOGO: &str = "#0D0D0D";

/// Every fallback property, light first
pub fn all_vars() -> Vec<CssVar> {
    vec![
        light::BACKGROUND_50,
        light::BACKGROUND_100,
        light::BACKGROUND_200,
        light::BACKGROUND_400,
        light::PRIMARY_300,
        light::PRIMARY_400,
        light::ONDARK_01,
        light::ONLIGHT_01,
        light::ONLIGHT_04,
        dark::BACKGROUND_50,
        dark::BACKGROUND_100,
        dark::BACKGROUND_200,
        dark::BACKGROUND_400,
        dark::BACKGROUND_500,
        dark::BACKGROUND_600,
        dark::PRIMARY_200,
        dark::PRIMARY_300,
        dark::ONLIGHT_01,
        dark::ONLIGHT_03,
        dark::ONDARK_01,
        dark::ONDARK_03,
        dark::ONDARK_04,
    ]
}
