//! Tint/shade ramp generation
//!
//! One base color becomes five steps keyed by nominal weight:
//!
//! | step | lightness × | saturation × |
//! |------|-------------|--------------|
//! | 500  | 0.60        | 1.20         |
//! | 400  | 0.85        | 1.10         |
//! | 300  | base color, unchanged    ||
//! | 200  | 1.50        | 0.90         |
//! | 100  | 1.75        | 0.80         |
//!
//! Darker steps gain saturation and lighter steps lose it. The factors are
//! fixed; changing them changes every rendered widget.

use std::fmt;
use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::hex::HexColor;
use crate::hsl::hsl_to_rgb;

/// Position in the variant ramp
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VariantStep {
    /// `100`
    Lightest,
    /// `200`
    Lighter,
    /// `300`, the input color itself
    Base,
    /// `400`
    Darker,
    /// `500`
    Darkest,
}

impl VariantStep {
    /// Steps in key order (`100` through `500`)
    pub fn all() -> &'static [VariantStep] {
        const STEPS: [VariantStep; 5] = [
            VariantStep::Lightest,
            VariantStep::Lighter,
            VariantStep::Base,
            VariantStep::Darker,
            VariantStep::Darkest,
        ];
        &STEPS
    }

    /// Weight key (`"100"` .. `"500"`)
    pub fn key(self) -> &'static str {
        match self {
            Self::Lightest => "100",
            Self::Lighter => "200",
            Self::Base => "300",
            Self::Darker => "400",
            Self::Darkest => "500",
        }
    }

    /// Look a step up by its weight key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|step| step.key() == key)
    }

    /// `(lightness, saturation)` multipliers, `None` for the base step
    pub fn factors(self) -> Option<(f64, f64)> {
        match self {
            Self::Darkest => Some((0.6, 1.2)),
            Self::Darker => Some((0.85, 1.1)),
            Self::Base => None,
            Self::Lighter => Some((1.5, 0.9)),
            Self::Lightest => Some((1.75, 0.8)),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for VariantStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Scale a color's lightness and saturation in HSL space.
///
/// Both results are clamped to `[0, 1]`. The output is canonical `#rrggbb`.
pub fn adjust_color(color: &HexColor, lightness_factor: f64, saturation_factor: f64) -> HexColor {
    let hsl = color.to_hsl().scaled(lightness_factor, saturation_factor);
    HexColor::from_rgb(hsl_to_rgb(hsl))
}

/// The five-step ramp derived from one base color
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorVariants {
    colors: [HexColor; 5],
}

impl ColorVariants {
    pub fn get(&self, step: VariantStep) -> &HexColor {
        &self.colors[step.index()]
    }

    /// Look a variant up by weight key (`"100"` .. `"500"`)
    pub fn by_key(&self, key: &str) -> Option<&HexColor> {
        VariantStep::from_key(key).map(|step| self.get(step))
    }

    /// The untouched input color (step `300`)
    pub fn base(&self) -> &HexColor {
        self.get(VariantStep::Base)
    }

    /// Variants in key order, `100` first
    pub fn iter(&self) -> impl Iterator<Item = (VariantStep, &HexColor)> + '_ {
        VariantStep::all().iter().map(move |&step| (step, self.get(step)))
    }
}

impl Index<VariantStep> for ColorVariants {
    type Output = HexColor;

    fn index(&self, step: VariantStep) -> &HexColor {
        self.get(step)
    }
}

impl Serialize for ColorVariants {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.colors.len()))?;
        for (step, color) in self.iter() {
            map.serialize_entry(step.key(), color.as_str())?;
        }
        map.end()
    }
}

/// Build the tint/shade ramp for `base`
pub fn generate_color_variants(base: &HexColor) -> ColorVariants {
    let variant = |step: VariantStep| match step.factors() {
        Some((lightness, saturation)) => adjust_color(base, lightness, saturation),
        None => base.clone(),
    };

    let variants = ColorVariants {
        colors: [
            variant(VariantStep::Lightest),
            variant(VariantStep::Lighter),
            variant(VariantStep::Base),
            variant(VariantStep::Darker),
            variant(VariantStep::Darkest),
        ],
    };

    tracing::trace!(
        base = %base,
        lightest = %variants[VariantStep::Lightest],
        darkest = %variants[VariantStep::Darkest],
        "generated color variants"
    );

    variants
}
