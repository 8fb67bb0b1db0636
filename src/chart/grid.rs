//! Composed small-multiples output and its SVG layout.

use super::options::Layout;
use super::panel::Panel;
use crate::ChartError;
use crate::svg::{ChartColor, Group, Rect, SvgBuilder, Text, TextAnchor};

/// Result of deriving one series' panel.
#[derive(Debug)]
pub enum PanelOutcome {
    Rendered(Box<Panel>),
    /// The series failed validation or derivation; siblings are unaffected.
    Omitted {
        id: String,
        label: String,
        error: ChartError,
    },
}

impl PanelOutcome {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Rendered(panel) => &panel.id,
            Self::Omitted { id, .. } => id,
        }
    }

    #[must_use]
    pub fn panel(&self) -> Option<&Panel> {
        match self {
            Self::Rendered(panel) => Some(panel.as_ref()),
            Self::Omitted { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_omitted(&self) -> bool {
        matches!(self, Self::Omitted { .. })
    }
}

/// One outcome per series, in dataset order.
#[derive(Debug)]
pub struct ChartGrid {
    pub outcomes: Vec<PanelOutcome>,
    pub layout: Layout,
}

impl ChartGrid {
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Panels that rendered, in dataset order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.outcomes.iter().filter_map(PanelOutcome::panel)
    }

    #[must_use]
    pub fn omitted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_omitted()).count()
    }

    /// Grid dimensions as `(columns, rows)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        let columns = self.layout.columns.max(1).min(self.outcomes.len().max(1));
        let rows = self.outcomes.len().div_ceil(columns).max(1);
        (columns, rows)
    }

    /// Render the grid as a standalone SVG document.
    ///
    /// `pointer_x`, in plot coordinates, adds a tooltip mark to every rendered panel.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_svg(&self, pointer_x: Option<f64>) -> String {
        let (columns, rows) = self.dimensions();
        let Layout {
            width,
            height,
            margin,
            ..
        } = self.layout;

        let mut builder = SvgBuilder::new(width * columns as f64, height * rows as f64)
            .with_title(format!("{} series", self.outcomes.len()));

        for (index, outcome) in self.outcomes.iter().enumerate() {
            let x = (index % columns) as f64 * width + margin.left;
            let y = (index / columns) as f64 * height + margin.top;

            match outcome {
                PanelOutcome::Rendered(panel) => {
                    if let Some(gradient) = &panel.gradient {
                        builder = builder.push_def(gradient);
                    }
                    builder = builder.push_element(&panel.to_group(x, y, pointer_x));
                }
                PanelOutcome::Omitted { label, error, .. } => {
                    builder = builder.push_element(&self.placeholder(x, y, label, error));
                }
            }
        }

        builder.build()
    }

    /// Flagged stand-in for a series that could not be charted.
    fn placeholder(&self, x: f64, y: f64, label: &str, error: &ChartError) -> Group {
        let (plot_width, plot_height) = (self.layout.plot_width(), self.layout.plot_height());
        let flag = ChartColor::css_var("omitted", "#eb5757");

        let mut group = Group::translated(x, y).with_class("panel omitted");
        group.push(&Text::new(0.0, -20.0, label).bold());
        group.push(
            &Text::new(
                plot_width / 2.0,
                plot_height / 2.0,
                format!("omitted ({})", error.kind()),
            )
            .with_anchor(TextAnchor::Middle)
            .with_color(flag.clone()),
        );
        group.push(
            &Text::new(plot_width / 2.0, plot_height / 2.0 + 16.0, error.to_string())
                .with_anchor(TextAnchor::Middle)
                .with_font_size(10.0),
        );
        group.push(
            &Rect::new(0.0, 0.0, plot_width, plot_height)
                .with_stroke(flag)
                .with_title(error.to_string()),
        );
        group
    }
}

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
