//! SVG scatter plot of the point store, optionally with a query overlay.
//!
//! Layout
//! - Axes run from 0 to `max(coordinate) + padding` on each side.
//! - Every point is a marker with its label anchored above-left of it.
//! - With an overlay: the source is drawn in red, visible points in green,
//!   and the geometric cone (two rays plus the arc at `max_distance`) in red.
//!   The arc shows the full geometric sector, including any part the
//!   unwrapped cone test cannot reach.

use anyhow::{Context, Result};
use peripheral::{PointStore, VisibilityResult};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

pub const TITLE: &str = "Points and Peripheral Vision";

/// Plot appearance.
#[derive(Clone, Copy, Debug)]
pub struct PlotCfg {
    /// Pixel size of the SVG canvas.
    pub size: (u32, u32),
    /// Added to the largest coordinate on each axis.
    pub padding: f64,
    pub marker_radius: u32,
    pub font_size: u32,
    /// Segments used to draw the cone arc.
    pub arc_segments: usize,
}

impl Default for PlotCfg {
    fn default() -> Self {
        Self {
            size: (800, 600),
            padding: 10.0,
            marker_radius: 4,
            font_size: 12,
            arc_segments: 64,
        }
    }
}

/// Upper axis limits; never below `padding` so the ranges stay non-empty.
pub fn axis_limits(store: &PointStore, padding: f64) -> Option<(f64, f64)> {
    let (max_x, max_y) = store.max_xy()?;
    Some(((max_x + padding).max(padding), (max_y + padding).max(padding)))
}

/// Polyline tracing the cone boundary: source → ray end → arc → ray end → source.
fn cone_outline(result: &VisibilityResult, reach: f64, segments: usize) -> Vec<(f64, f64)> {
    let (sx, sy) = (result.source.x(), result.source.y());
    let (lo, hi) = result.cone.bounds();
    let segments = segments.max(1);
    let mut outline = Vec::with_capacity(segments + 3);
    outline.push((sx, sy));
    for k in 0..=segments {
        let th = lo + (hi - lo) * (k as f64) / (segments as f64);
        outline.push((sx + reach * th.cos(), sy + reach * th.sin()));
    }
    outline.push((sx, sy));
    outline
}

/// Render `store` to an SVG at `path`.
pub fn render(
    path: &Path,
    store: &PointStore,
    overlay: Option<&VisibilityResult>,
    cfg: &PlotCfg,
) -> Result<()> {
    let (x_hi, y_hi) = axis_limits(store, cfg.padding).context("no points to plot")?;

    let root = SVGBackend::new(path, cfg.size).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 22))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(44)
        .build_cartesian_2d(0f64..x_hi, 0f64..y_hi)?;
    chart.configure_mesh().x_desc("X").y_desc("Y").draw()?;

    if let Some(result) = overlay {
        // Infinite range: stop at the far corner of the plot.
        let reach = result.max_distance.min(x_hi.hypot(y_hi));
        chart.draw_series(std::iter::once(PathElement::new(
            cone_outline(result, reach, cfg.arc_segments),
            RED.mix(0.6).stroke_width(1),
        )))?;
    }

    chart.draw_series(
        store
            .points()
            .iter()
            .map(|p| Circle::new((p.x(), p.y()), cfg.marker_radius, BLUE.filled())),
    )?;

    if let Some(result) = overlay {
        chart.draw_series(result.visible.iter().map(|p| {
            Circle::new((p.x(), p.y()), cfg.marker_radius + 1, GREEN.filled())
        }))?;
        chart.draw_series(std::iter::once(Circle::new(
            (result.source.x(), result.source.y()),
            cfg.marker_radius + 2,
            RED.filled(),
        )))?;
    }

    let label_style = TextStyle::from(("sans-serif", cfg.font_size).into_font())
        .pos(Pos::new(HPos::Right, VPos::Bottom));
    chart.draw_series(store.points().iter().map(|p| {
        Text::new(p.label.clone(), (p.x(), p.y()), label_style.clone())
    }))?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        x_hi,
        y_hi,
        overlay = overlay.is_some(),
        "plot_rendered"
    );
    Ok(())
}
