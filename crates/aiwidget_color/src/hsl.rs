//! HSL color space
//!
//! Lightening and darkening happen in HSL so the hue stays put; scaling RGB
//! channels directly would drift it.

use serde::{Deserialize, Serialize};

use crate::hex::Rgb;

/// Hue, saturation and lightness, each in `[0, 1]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Scale lightness and saturation, clamping both back into `[0, 1]`
    pub fn scaled(self, lightness_factor: f64, saturation_factor: f64) -> Self {
        Self {
            h: self.h,
            s: (self.s * saturation_factor).clamp(0.0, 1.0),
            l: (self.l * lightness_factor).clamp(0.0, 1.0),
        }
    }
}

/// Convert RGB to HSL.
///
/// Achromatic colors (all channels equal) get hue 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let l = (max + min) / 2.0;

    if d == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

/// Convert HSL back to RGB, rounding each channel to the nearest integer
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb::new(to_byte(r), to_byte(g), to_byte(b))
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primary_colors() {
        let red = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert!(approx(red.h, 0.0) && approx(red.s, 1.0) && approx(red.l, 0.5));

        let green = rgb_to_hsl(Rgb::new(0, 255, 0));
        assert!(approx(green.h, 1.0 / 3.0));

        let blue = rgb_to_hsl(Rgb::new(0, 0, 255));
        assert!(approx(blue.h, 2.0 / 3.0));
    }

    #[test]
    fn test_red_max_wraps_hue() {
        // Blue above green with red dominant lands in the last sextant.
        let magenta_red = rgb_to_hsl(Rgb::new(255, 0, 128));
        assert!(magenta_red.h > 5.0 / 6.0 && magenta_red.h < 1.0);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let gray = rgb_to_hsl(Rgb::new(0xee, 0xee, 0xee));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!(approx(gray.l, 238.0 / 255.0));
        assert_eq!(hsl_to_rgb(gray), Rgb::new(0xee, 0xee, 0xee));
    }

    #[test]
    fn test_light_saturation_branch() {
        // l > 0.5 uses d / (2 - max - min)
        let pastel = rgb_to_hsl(Rgb::new(255, 200, 200));
        let expected = (55.0 / 255.0) / (2.0 - 1.0 - 200.0 / 255.0);
        assert!(approx(pastel.s, expected));
    }

    #[test]
    fn test_known_roundtrip() {
        let accent = Rgb::new(0x74, 0x2d, 0xdd);
        assert_eq!(hsl_to_rgb(rgb_to_hsl(accent)), accent);
    }

    #[test]
    fn test_scaled_clamps() {
        let hsl = Hsl::new(0.5, 0.9, 0.8).scaled(1.75, 1.2);
        assert_eq!(hsl.l, 1.0);
        assert_eq!(hsl.s, 1.0);
        assert_eq!(hsl.h, 0.5);
    }
}
