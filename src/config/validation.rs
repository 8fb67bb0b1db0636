//! Configuration semantic validation.
//!
//! Validates that configuration values are usable after parsing: range
//! checks, color syntax and cross-field constraints.

use super::model::{Config, YDomainMode};
use crate::{ChartError, Result};

/// Upper bound for tick counts.
pub const MAX_TICKS: usize = 100;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns a `Config` error naming the first offending key.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_layout(config)?;
    validate_scales(config)?;
    validate_axes(config)?;
    validate_style(config)?;
    Ok(())
}

fn invalid(message: String) -> Result<()> {
    Err(ChartError::Config(message))
}

fn validate_layout(config: &Config) -> Result<()> {
    let layout = &config.layout;
    for (key, value) in [("width", layout.width), ("height", layout.height)] {
        if !(value.is_finite() && value > 0.0) {
            return invalid(format!("layout.{key} must be a positive number, got {value}"));
        }
    }

    let margin = &layout.margin;
    for (key, value) in [
        ("top", margin.top),
        ("right", margin.right),
        ("bottom", margin.bottom),
        ("left", margin.left),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return invalid(format!("layout.margin.{key} must be non-negative, got {value}"));
        }
    }

    if margin.left + margin.right >= layout.width {
        return invalid(format!(
            "layout.margin.left + layout.margin.right ({}) leaves no plot width in layout.width ({})",
            margin.left + margin.right,
            layout.width
        ));
    }
    if margin.top + margin.bottom >= layout.height {
        return invalid(format!(
            "layout.margin.top + layout.margin.bottom ({}) leaves no plot height in layout.height ({})",
            margin.top + margin.bottom,
            layout.height
        ));
    }

    if layout.columns == 0 {
        return invalid("layout.columns must be at least 1".to_string());
    }
    Ok(())
}

fn validate_scales(config: &Config) -> Result<()> {
    let scales = &config.scales;
    match (scales.y, scales.y_min, scales.y_max) {
        (YDomainMode::Fixed, Some(min), Some(max)) => {
            if !(min.is_finite() && max.is_finite()) || min >= max {
                return invalid(format!(
                    "scales.y_min ({min}) must be less than scales.y_max ({max})"
                ));
            }
        }
        (YDomainMode::Fixed, ..) => {
            return invalid(
                "scales.y = \"fixed\" requires both scales.y_min and scales.y_max".to_string(),
            );
        }
        (_, Some(_), _) | (_, _, Some(_)) => {
            return invalid(
                "scales.y_min and scales.y_max are only used when scales.y = \"fixed\"".to_string(),
            );
        }
        _ => {}
    }

    if let (Some(start), Some(end)) = (scales.x_start, scales.x_end)
        && start >= end
    {
        return invalid(format!(
            "scales.x_start ({start}) must be before scales.x_end ({end})"
        ));
    }
    Ok(())
}

fn validate_axes(config: &Config) -> Result<()> {
    let axes = &config.axes;
    for (key, value) in [
        ("left_ticks", axes.left_ticks),
        ("bottom_ticks", axes.bottom_ticks),
    ] {
        if value > MAX_TICKS {
            return invalid(format!("axes.{key} must be at most {MAX_TICKS}, got {value}"));
        }
    }
    if !(axes.font_size.is_finite() && axes.font_size > 0.0) {
        return invalid(format!(
            "axes.font_size must be a positive number, got {}",
            axes.font_size
        ));
    }
    if !(axes.label_padding.is_finite() && axes.label_offset.is_finite()) {
        return invalid("axes.label_padding and axes.label_offset must be finite".to_string());
    }
    Ok(())
}

/// `#rgb` or `#rrggbb`.
fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

fn validate_style(config: &Config) -> Result<()> {
    let style = &config.style;
    if !style.threshold.is_finite() {
        return invalid(format!("style.threshold must be finite, got {}", style.threshold));
    }
    if !(0.0..=1.0).contains(&style.band_opacity) {
        return invalid(format!(
            "style.band_opacity must be between 0.0 and 1.0, got {}",
            style.band_opacity
        ));
    }
    for (key, value) in [
        ("band_stroke_width", style.band_stroke_width),
        ("line_stroke_width", style.line_stroke_width),
        ("dot_radius", style.dot_radius),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return invalid(format!("style.{key} must be non-negative, got {value}"));
        }
    }
    for (key, value) in [
        ("above_color", &style.above_color),
        ("below_color", &style.below_color),
        ("frame_color", &style.frame_color),
    ] {
        if let Some(color) = value
            && !is_hex_color(color)
        {
            return invalid(format!(
                "style.{key} must be a hex color like \"#eb5757\", got \"{color}\""
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
