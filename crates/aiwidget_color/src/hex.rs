//! Hex color strings and 8-bit RGB triples

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, Result};
use crate::hsl::{rgb_to_hsl, Hsl};

/// 8-bit sRGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Parse a hex color into RGB channels.
///
/// A leading `#` is optional. The digits are split into three equal-width
/// chunks, one per channel, so `#rgb`, `#rrggbb` and `#rrrrggggbbbb` are all
/// accepted:
///
/// - 1-digit chunks are read as-is (`#fff` is `(15, 15, 15)`, not white)
/// - 2-digit chunks are the usual 8-bit channels
/// - wider chunks keep their most significant byte
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.is_empty() {
        return Err(ColorError::invalid(hex, "no hex digits"));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::invalid(hex, format!("{c:?} is not a hex digit")));
    }
    if digits.len() % 3 != 0 {
        return Err(ColorError::invalid(
            hex,
            format!("{} digits cannot be split into three channels", digits.len()),
        ));
    }

    let width = digits.len() / 3;
    let channel = |index: usize| parse_channel(hex, &digits[index * width..(index + 1) * width]);

    Ok(Rgb::new(channel(0)?, channel(1)?, channel(2)?))
}

fn parse_channel(input: &str, chunk: &str) -> Result<u8> {
    // Only the leading byte of a wide chunk survives.
    let significant = &chunk[..chunk.len().min(2)];
    u8::from_str_radix(significant, 16)
        .map_err(|err| ColorError::invalid(input, format!("bad channel {chunk:?}: {err}")))
}

/// Format RGB channels as `#rrggbb` (lowercase, zero-padded)
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// A validated hex color.
///
/// Keeps the caller's spelling (case, optional `#`) so a color that passes
/// through the engine unchanged is echoed back exactly as it came in.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    raw: String,
    rgb: Rgb,
}

impl HexColor {
    /// Validate and parse a hex color string
    pub fn parse(input: &str) -> Result<Self> {
        let rgb = hex_to_rgb(input)?;
        Ok(Self {
            raw: input.to_string(),
            rgb,
        })
    }

    /// Canonical `#rrggbb` color for the given channels
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            raw: rgb_to_hex(rgb),
            rgb,
        }
    }

    /// The color exactly as it was written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.rgb)
    }

    /// Canonical lowercase `#rrggbb` spelling
    pub fn to_canonical(&self) -> String {
        rgb_to_hex(self.rgb)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self> {
        let rgb = hex_to_rgb(&value)?;
        Ok(Self { raw: value, rgb })
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.raw
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}
