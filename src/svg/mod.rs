//! Declarative SVG render description.
//!
//! Chart components never draw; they produce values implementing
//! [`SvgElement`], which a renderer turns into markup:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration (`var(--color-*)`) with hex fallbacks
//! - Accessibility: `<title>` elements for screen readers

mod builder;
mod element;
mod format;
mod style;

pub use builder::{Group, SvgBuilder};
pub use element::{Circle, GradientStop, LinearGradient, PathElement, Rect, Rule, SvgElement, Text};
pub use format::html_escape;
pub use style::{ChartColor, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
