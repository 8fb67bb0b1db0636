use std::fs;
use std::path::Path;

use tracing::info;

use crate::chart::{ChartGrid, PanelOutcome, SmallMultiples};
use crate::cli::{Cli, RenderArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::data::load_dataset;
use crate::{EXIT_CONFIG_ERROR, EXIT_SERIES_OMITTED, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Load the config and dataset, render the chart and write the SVG.
///
/// Returns `EXIT_SERIES_OMITTED` when at least one series could not be charted.
///
/// # Errors
/// Returns an error if the config or dataset cannot be loaded, or the output cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), args.no_config)?;

    let mut options = config.chart_options()?;
    if let Some(columns) = args.columns {
        options.layout.columns = columns.max(1);
    }
    let order = args.order.map_or(config.order, Into::into);

    let dataset = load_dataset(&args.dataset)?.ordered(order);

    let mut chart = SmallMultiples::new(options);
    let grid = chart.render(&dataset)?;
    let svg = grid.to_svg(args.pointer);

    write_output(args.output.as_deref(), &svg)?;

    if !cli.quiet {
        report_omitted(grid);
    }

    Ok(if grid.omitted_count() > 0 {
        EXIT_SERIES_OMITTED
    } else {
        EXIT_SUCCESS
    })
}

/// Load configuration from an explicit path, by discovery, or use defaults.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or is invalid.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    let result = match path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };
    if let Some(source) = &result.source {
        info!(path = %source.display(), "using config");
    }
    Ok(result.config)
}

fn write_output(path: Option<&Path>, svg: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, svg)?;
            info!(path = %path.display(), bytes = svg.len(), "wrote chart");
        }
        None => println!("{svg}"),
    }
    Ok(())
}

fn report_omitted(grid: &ChartGrid) {
    for outcome in &grid.outcomes {
        if let PanelOutcome::Omitted { id, error, .. } = outcome {
            eprintln!("Omitted series '{id}': {error}");
        }
    }
    let omitted = grid.omitted_count();
    if omitted > 0 {
        eprintln!("Rendered {} of {} series", grid.len() - omitted, grid.len());
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
