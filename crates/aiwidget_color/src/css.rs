//! CSS custom properties for the primary color ramp

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;

use crate::hex::HexColor;
use crate::scheme::ColorScheme;
use crate::variants::{generate_color_variants, VariantStep};

/// Prefix shared by every custom property the widget reads
pub const VARIABLE_PREFIX: &str = "--sendbird";

/// `--sendbird-<scheme>-primary-<step>`
pub fn primary_variable_name(scheme: ColorScheme, step: VariantStep) -> String {
    format!("{VARIABLE_PREFIX}-{scheme}-primary-{}", step.key())
}

/// Ordered custom-property name → color map
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CssVariables(IndexMap<String, String>);

impl CssVariables {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge another set in, later values winning
    pub fn extend(&mut self, other: CssVariables) {
        self.0.extend(other.0);
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.0
    }

    /// Render as a CSS rule, one declaration per line
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            // Writing to a String cannot fail
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push('}');
        css
    }
}

/// Custom properties for the ramp of `accent` under `scheme`, `100` first
pub fn generate_css_variables(accent: &HexColor, scheme: ColorScheme) -> CssVariables {
    let variants = generate_color_variants(accent);
    let map = variants
        .iter()
        .map(|(step, color)| (primary_variable_name(scheme, step), color.to_string()))
        .collect();

    tracing::debug!(%accent, %scheme, "generated primary css variables");
    CssVariables(map)
}
