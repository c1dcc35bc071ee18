use aiwidget_color::ColorScheme;
use serde::Serialize;

use crate::builder::{get_theme, ThemeInputs};
use crate::theme::WidgetTheme;

/// Light and dark theme trees built from the same inputs.
///
/// Immutable once built; rebuild when the inputs change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeBundle {
    pub light: WidgetTheme,
    pub dark: WidgetTheme,
}

impl ThemeBundle {
    pub fn from_inputs(inputs: &ThemeInputs) -> Self {
        get_theme(inputs)
    }

    /// Theme with every leaf at its fallback value
    pub fn fallback() -> Self {
        get_theme(&ThemeInputs::default())
    }

    /// Get the theme for a specific color scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &WidgetTheme {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_scheme() {
        let bundle = ThemeBundle::fallback();
        assert_eq!(bundle.for_scheme(ColorScheme::Light).scheme(), ColorScheme::Light);
        assert_eq!(bundle.for_scheme(ColorScheme::Dark).scheme(), ColorScheme::Dark);
    }
}
