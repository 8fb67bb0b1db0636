//! SVG styling primitives: colors and text anchoring.

use std::fmt;

use serde::Serialize;

/// Paint specification for fills and strokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#22c55e")
    Hex(String),
    /// CSS variable reference with a fallback (e.g., "band" → "var(--color-band, #999)")
    CssVar { name: String, fallback: String },
    /// Reference to a paint server such as a gradient (`url(#id)`)
    Url(String),
    /// No paint
    None,
}

impl ChartColor {
    /// Create a CSS variable color reference with a hex fallback.
    #[must_use]
    pub fn css_var(name: &str, fallback: &str) -> Self {
        Self::CssVar {
            name: name.to_string(),
            fallback: fallback.to_string(),
        }
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Reference a gradient or other paint server by element id.
    #[must_use]
    pub fn url(id: &str) -> Self {
        Self::Url(id.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar { name, fallback } => format!("var(--color-{name}, {fallback})"),
            Self::Url(id) => format!("url(#{id})"),
            Self::None => "none".to_string(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
