//! Chart container: one panel per series ("small multiples").
//!
//! Derivation runs dataset -> domains -> scales -> paths -> render description,
//! and is memoized on a structural hash of the dataset and the options.
//! Series that fail validation or derivation become [`PanelOutcome::Omitted`]
//! while their siblings still render.

mod domain;
mod grid;
mod options;
mod panel;

use tracing::{debug, warn};

use crate::Result;
use crate::dataset::{Dataset, Series};
use crate::memo::Memo;

pub use domain::SharedDomains;
pub use grid::{ChartGrid, PanelOutcome};
pub use options::{ChartOptions, Layout, Margin, PanelStyle, XDomainPolicy, YDomainPolicy};
pub use panel::Panel;

/// Derive every panel for `dataset`, keeping dataset order.
#[must_use]
pub fn derive_grid(dataset: &Dataset, options: &ChartOptions) -> ChartGrid {
    let checks: Vec<Result<()>> = dataset.series.iter().map(Series::validate).collect();
    let valid: Vec<&Series> = dataset
        .series
        .iter()
        .zip(&checks)
        .filter(|(_, check)| check.is_ok())
        .map(|(series, _)| series)
        .collect();
    let shared = SharedDomains::from_series(&valid, options);

    let outcomes = dataset
        .series
        .iter()
        .zip(checks)
        .enumerate()
        .map(|(index, (series, check))| {
            match check.and_then(|()| Panel::build(index, series, &shared, options)) {
                Ok(panel) => PanelOutcome::Rendered(Box::new(panel)),
                Err(error) => {
                    warn!(series = %series.id, kind = error.kind(), "omitting panel: {error}");
                    PanelOutcome::Omitted {
                        id: series.id.clone(),
                        label: series.label.clone(),
                        error,
                    }
                }
            }
        })
        .collect();

    ChartGrid {
        outcomes,
        layout: options.layout,
    }
}

/// Memoized small-multiples chart.
#[derive(Debug)]
pub struct SmallMultiples {
    options: ChartOptions,
    memo: Memo<ChartGrid>,
}

impl SmallMultiples {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            memo: Memo::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Replace the options; the next render recomputes only if they differ.
    pub fn set_options(&mut self, options: ChartOptions) {
        self.options = options;
    }

    /// Chart for `dataset`, recomputed only when the dataset or options changed.
    ///
    /// # Errors
    /// Returns an error only if the inputs cannot be hashed. Per-series
    /// failures are reported as omitted panels inside the grid.
    pub fn render(&mut self, dataset: &Dataset) -> Result<&ChartGrid> {
        let options = &self.options;
        let grid = self
            .memo
            .get_or_compute(&(dataset, options), || derive_grid(dataset, options))?;
        debug!(
            panels = grid.len(),
            omitted = grid.omitted_count(),
            "chart ready"
        );
        Ok(grid)
    }

    /// Number of times scales and paths have been derived.
    #[must_use]
    pub const fn recompute_count(&self) -> usize {
        self.memo.computations()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
