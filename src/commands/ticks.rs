use crate::cli::TicksArgs;
use crate::config::MAX_TICKS;
use crate::scale::{LinearScale, Scale};
use crate::{ChartError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_ticks(args: &TicksArgs) -> i32 {
    match run_ticks_impl(args) {
        Ok(labels) => {
            for label in labels {
                println!("{label}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Formatted nice ticks for `[min, max]`, one label per tick.
///
/// # Errors
/// Returns `Config` when the count exceeds [`MAX_TICKS`] and `Domain` for a
/// zero-width or non-finite domain.
pub fn run_ticks_impl(args: &TicksArgs) -> Result<Vec<String>> {
    if args.count > MAX_TICKS {
        return Err(ChartError::Config(format!(
            "--count must be at most {MAX_TICKS}, got {}",
            args.count
        )));
    }
    let scale = LinearScale::new(args.min, args.max, 0.0, 1.0)?;
    Ok(scale
        .ticks(args.count)
        .into_iter()
        .map(|value| scale.format_tick(value, args.count))
        .collect())
}

#[cfg(test)]
#[path = "ticks_tests.rs"]
mod tests;
