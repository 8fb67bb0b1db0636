//! One chart per series: scales, axes, band, line and hover targets.

use tracing::debug;

use super::domain::SharedDomains;
use super::options::{ChartOptions, PanelStyle, YDomainPolicy};
use crate::Result;
use crate::axis::{AxisTick, bottom_axis_styled, left_axis_styled};
use crate::dataset::{Observation, Series};
use crate::scale::{LinearScale, Scale, TemporalScale};
use crate::shape::{AreaGenerator, DotGenerator, LineGenerator, PathSpec, Point};
use crate::svg::{
    ChartColor, Circle, Group, LinearGradient, PathElement, Rect, SvgElement, Text,
};
use crate::tooltip::{HoverZone, Tooltip, TooltipMark, observation_label};

/// Fully derived panel for one series.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: String,
    pub label: String,
    /// Latest central value with two decimals
    pub headline: Option<String>,
    pub plot_width: f64,
    pub plot_height: f64,
    pub x_scale: TemporalScale,
    pub y_scale: LinearScale,
    pub left_ticks: Vec<AxisTick>,
    pub bottom_ticks: Vec<AxisTick>,
    /// Threshold paint server shared by the band and the line
    pub gradient: Option<LinearGradient>,
    pub area: PathSpec,
    pub line: PathSpec,
    /// Central values in pixels, one per finite observation
    pub markers: Vec<Point>,
    pub hover_zones: Vec<HoverZone>,
    observations: Vec<Observation>,
    paint: ChartColor,
    style: PanelStyle,
}

/// Element id for a panel's gradient; only `[A-Za-z0-9_-]` survive from the series id.
fn gradient_id(index: usize, id: &str) -> String {
    let slug: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("band-{index}-{slug}")
}

/// Vertical gradient switching from `below` to `above` at the threshold's pixel row.
fn threshold_gradient(
    id: String,
    threshold: f64,
    y_scale: &LinearScale,
    plot_height: f64,
    style: &PanelStyle,
) -> LinearGradient {
    let row = y_scale.map(threshold);
    let offset = if plot_height > 0.0 {
        (plot_height - row) / plot_height
    } else {
        0.0
    };
    LinearGradient::vertical(id, plot_height, 0.0)
        .with_stop(0.0, style.below.clone())
        .with_stop(offset, style.below.clone())
        .with_stop(offset, style.above.clone())
        .with_stop(1.0, style.above.clone())
}

impl Panel {
    /// Derive the panel for the series at `index`.
    ///
    /// The series must already have passed `Series::validate`.
    ///
    /// # Errors
    /// Returns `Domain` for a degenerate domain under the reject policy,
    /// `EmptySeries` when no extent can be derived, and `InvalidBand` when an
    /// observation's low value exceeds its high value.
    pub fn build(
        index: usize,
        series: &Series,
        shared: &SharedDomains,
        options: &ChartOptions,
    ) -> Result<Self> {
        let layout = &options.layout;
        let (plot_width, plot_height) = (layout.plot_width(), layout.plot_height());

        let (x0, x1) = shared.x_for(series, options)?;
        let x_scale = TemporalScale::with_policy(x0, x1, 0.0, plot_width, options.degenerate)?;

        let (y0, y1) = shared.y_for(series)?;
        let mut y_scale = LinearScale::with_policy(y0, y1, plot_height, 0.0, options.degenerate)?;
        if options.nice_y && !matches!(options.y_domain, YDomainPolicy::Fixed { .. }) {
            y_scale = y_scale.nice(options.left_ticks);
        }

        let observations = &series.observations;
        let area = AreaGenerator::new(
            |o: &Observation| x_scale.map(o.date),
            |o: &Observation| o.low,
            |o: &Observation| o.high,
        )
        .with_projection(|value| y_scale.map(value))
        .generate(observations)?;
        let line = LineGenerator::new(
            |o: &Observation| x_scale.map(o.date),
            |o: &Observation| y_scale.map(o.central),
        )
        .generate(observations);
        let markers = DotGenerator::new(
            |o: &Observation| x_scale.map(o.date),
            |o: &Observation| y_scale.map(o.central),
        )
        .generate(observations);

        let style = options.style.clone();
        let gradient = style.threshold.map(|threshold| {
            threshold_gradient(
                gradient_id(index, &series.id),
                threshold,
                &y_scale,
                plot_height,
                &style,
            )
        });
        let paint = gradient
            .as_ref()
            .map_or_else(|| style.above.clone(), |g| ChartColor::url(&g.id));

        let left_ticks =
            left_axis_styled(&y_scale, plot_width, options.left_ticks, &options.axis_style);
        let bottom_ticks = bottom_axis_styled(
            &x_scale,
            plot_height,
            options.bottom_ticks,
            &options.axis_style,
        );
        let hover_zones = Tooltip::new(&x_scale, observations, plot_width).hover_zones();

        debug!(
            series = %series.id,
            observations = observations.len(),
            "derived panel"
        );

        Ok(Self {
            id: series.id.clone(),
            label: series.label.clone(),
            headline: series.latest().map(|o| format!("{:.2}", o.central)),
            plot_width,
            plot_height,
            x_scale,
            y_scale,
            left_ticks,
            bottom_ticks,
            gradient,
            area: area.into(),
            line: line.into(),
            markers,
            hover_zones,
            observations: observations.clone(),
            paint,
            style,
        })
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Nearest-observation lookup over this panel's series.
    #[must_use]
    pub fn tooltip(&self) -> Tooltip<'_, TemporalScale> {
        Tooltip::new(&self.x_scale, &self.observations, self.plot_width)
    }

    /// Tooltip mark for a pointer column in plot coordinates.
    #[must_use]
    pub fn tooltip_mark(&self, pointer_x: f64) -> Option<TooltipMark> {
        self.tooltip().mark(pointer_x, &self.y_scale, self.plot_height)
    }

    /// Panel contents in plot coordinates, translated to `(x, y)`.
    #[must_use]
    pub fn to_group(&self, x: f64, y: f64, pointer_x: Option<f64>) -> Group {
        let mut group = Group::translated(x, y).with_class("panel");

        group.push(&Text::new(0.0, -20.0, &self.label).bold());
        if let Some(headline) = &self.headline {
            group.push(&Text::new(self.plot_width - 30.0, -20.0, headline));
        }

        for tick in self.left_ticks.iter().chain(&self.bottom_ticks) {
            group.push(tick);
        }

        group.push(
            &PathElement::filled(self.area.to_svg_path(), self.paint.clone())
                .with_stroke(self.paint.clone(), self.style.band_stroke_width)
                .with_opacity(self.style.band_opacity),
        );
        group.push(&PathElement::stroked(
            self.line.to_svg_path(),
            self.paint.clone(),
            self.style.line_stroke_width,
        ));

        if self.style.dot_radius > 0.0 {
            for marker in &self.markers {
                group.push(&Circle::new(
                    marker.x,
                    marker.y,
                    self.style.dot_radius,
                    self.paint.clone(),
                ));
            }
        }

        for zone in &self.hover_zones {
            if let Some(obs) = self.observations.get(zone.index) {
                group.push(&zone.to_rect(self.plot_height, observation_label(obs)));
            }
        }

        if let Some(mark) = pointer_x.and_then(|px| self.tooltip_mark(px)) {
            group.push(&mark);
        }

        group.push(
            &Rect::new(0.0, 0.0, self.plot_width, self.plot_height)
                .with_stroke(self.style.frame.clone()),
        );
        group
    }
}

impl SvgElement for Panel {
    fn render(&self) -> String {
        self.to_group(0.0, 0.0, None).render()
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
