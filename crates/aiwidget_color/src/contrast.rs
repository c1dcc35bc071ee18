//! Label color selection for colored surfaces

use std::fmt;

use serde::Serialize;

use crate::hex::HexColor;

/// Saturation above which a surface gets white label text
pub const SATURATION_THRESHOLD: f64 = 0.5;

/// Text color placed on top of an arbitrary surface color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum LabelColor {
    #[serde(rename = "#fff")]
    White,
    #[serde(rename = "#000")]
    Black,
}

impl LabelColor {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "#fff",
            Self::Black => "#000",
        }
    }
}

impl fmt::Display for LabelColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick white or black label text for `surface`.
///
/// Uses HSL saturation, not luminance: strongly saturated surfaces get white
/// text, everything else black. A saturated light color such as `#FFFF00` still
/// gets white.
pub fn color_based_on_saturation(surface: &HexColor) -> LabelColor {
    if surface.to_hsl().s > SATURATION_THRESHOLD {
        LabelColor::White
    } else {
        LabelColor::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(s: &str) -> &'static str {
        color_based_on_saturation(&HexColor::parse(s).unwrap()).as_str()
    }

    #[test]
    fn test_threshold_fixtures() {
        assert_eq!(label("#000000"), "#000");
        assert_eq!(label("#FF0000"), "#fff");
        assert_eq!(label("#742DDD"), "#fff");
        assert_eq!(label("#EEEEEE"), "#000");
    }

    #[test]
    fn test_saturated_yellow_gets_white() {
        assert_eq!(label("#FFFF00"), "#fff");
    }

    #[test]
    fn test_just_below_threshold_is_black() {
        // s is about 0.498
        assert_eq!(label("#bf4040"), "#000");
        // s is about 0.506
        assert_eq!(label("#c03f3f"), "#fff");
    }
}
