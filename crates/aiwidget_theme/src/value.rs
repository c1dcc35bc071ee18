//! Theme leaf values

use std::fmt;

use aiwidget_color::{HexColor, LabelColor};
use serde::{Serialize, Serializer};

/// Reference to a CSS custom property defined by the host stylesheet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CssVar(&'static str);

impl CssVar {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Property name, e.g. `--sendbird-light-background-50`
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for CssVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var({})", self.0)
    }
}

/// A resolved theme leaf
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// A user color or a ramp step derived from one
    Color(HexColor),
    /// White/black text chosen for a colored surface
    Label(LabelColor),
    /// Fixed color literal
    Literal(&'static str),
    /// Fallback custom property
    Var(CssVar),
}

impl TokenValue {
    /// True when the value came from user input rather than a fallback
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::Color(_) | Self::Label(_))
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => fmt::Display::fmt(color, f),
            Self::Label(label) => fmt::Display::fmt(label, f),
            Self::Literal(literal) => f.write_str(literal),
            Self::Var(var) => fmt::Display::fmt(var, f),
        }
    }
}

impl From<CssVar> for TokenValue {
    fn from(var: CssVar) -> Self {
        Self::Var(var)
    }
}

impl Serialize for TokenValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialEq<str> for TokenValue {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Color(color) => color.as_str() == other,
            Self::Label(label) => label.as_str() == other,
            Self::Literal(literal) => *literal == other,
            Self::Var(_) => self.to_string() == other,
        }
    }
}

impl PartialEq<&str> for TokenValue {
    fn eq(&self, other: &&str) -> bool {
        <Self as PartialEq<str>>::eq(self, other)
    }
}
