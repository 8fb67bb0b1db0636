use std::fs;

use crate::cli::InitArgs;
use crate::{ChartError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ChartError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# bandchart configuration file

# Series order before charting: "as-given", "label", "id" or "latest-central"
order = "as-given"

[layout]
# Outer size of one panel in pixels, margins included
width = 500.0
height = 260.0

# Panels per row
columns = 2

[layout.margin]
top = 40.0
right = 40.0
bottom = 40.0
left = 40.0

[scales]
# Time axis: "shared" across panels or "independent" per panel
x = "shared"

# Value axis: "shared", "independent" or "fixed" (needs y_min and y_max)
y = "shared"
# y = "fixed"
# y_min = 0.0
# y_max = 4.5

# Pin the time axis to explicit dates
# x_start = "2020-03-02"
# x_end = "2020-06-30"

# Zero-width domains (e.g. a single date): "reject" omits the panel,
# "constant" draws it centered
degenerate = "reject"

# Round derived value axes to tick multiples
nice = true

[axes]
left_ticks = 5
bottom_ticks = 10
label_padding = -20.0
label_offset = 20.0
font_size = 12.0

[style]
# Color values above the threshold with above_color, below with below_color
gradient = true
threshold = 1.0
# above_color = "#eb5757"
# below_color = "#27ae60"
# frame_color = "#eeeeee"

band_opacity = 0.08
band_stroke_width = 3.0
line_stroke_width = 1.5

# Marker radius at each value (0 draws no markers)
dot_radius = 0.0
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
