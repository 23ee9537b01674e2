//! Scatter plots with fitted regression lines, one panel per group.

use std::ops::Range;
use std::path::PathBuf;

use plotters::prelude::*;

use crate::analysis::RegressionRecord;
use crate::dataset::{Dataset, Group};
use crate::error::{AnalysisError, AnalysisResult};

const TITLE: &str = "Anscombe's Quartet Regression Lines";
const COLUMNS: usize = 2;

/// Seaborn's "muted" palette.
const PALETTE: [RGBColor; 6] = [
    RGBColor(0x48, 0x78, 0xd0),
    RGBColor(0xee, 0x85, 0x4a),
    RGBColor(0x6a, 0xcc, 0x64),
    RGBColor(0xd6, 0x5f, 0x5f),
    RGBColor(0x95, 0x6c, 0xb4),
    RGBColor(0x8c, 0x61, 0x3c),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotOptions {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Padded axis ranges covering every sample of `group`.
pub fn panel_bounds(group: &Group) -> (Range<f64>, Range<f64>) {
    fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            return 0.0..1.0;
        }
        let pad = if hi > lo { (hi - lo) * 0.1 } else { 1.0 };
        (lo - pad)..(hi + pad)
    }
    let samples = group.samples();
    (
        padded(samples.iter().map(|s| s.x)),
        padded(samples.iter().map(|s| s.y)),
    )
}

fn plot_err(e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::plot(e.to_string())
}

/// Render every group of `dataset` with its fitted line into an SVG file.
///
/// Groups without a matching record (skipped regressions) are drawn as
/// scatter only.
pub fn render_regression_grid(
    dataset: &Dataset,
    records: &[RegressionRecord],
    options: &PlotOptions,
) -> AnalysisResult<()> {
    let groups = dataset.groups();
    let rows = groups.len().div_ceil(COLUMNS).max(1);

    let root = SVGBackend::new(&options.output, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;
    let root = root
        .titled(TITLE, ("sans-serif", 24))
        .map_err(plot_err)?;
    let panels = root.split_evenly((rows, COLUMNS));

    for (i, (group, panel)) in groups.iter().zip(panels.iter()).enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let (x_range, y_range) = panel_bounds(group);

        let mut chart = ChartBuilder::on(panel)
            .caption(format!("dataset = {}", group.label()), ("sans-serif", 16))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(plot_err)?;
        chart
            .configure_mesh()
            .x_desc("x")
            .y_desc("y")
            .draw()
            .map_err(plot_err)?;

        chart
            .draw_series(
                group
                    .samples()
                    .iter()
                    .map(|s| Circle::new((s.x, s.y), 5, color.mix(0.7).filled())),
            )
            .map_err(plot_err)?;

        match records.iter().find(|r| r.dataset == group.label()) {
            Some(record) => {
                let fit = record.fit();
                let line = [x_range.start, x_range.end].map(|x| (x, fit.predict(x)));
                chart
                    .draw_series(LineSeries::new(line, color.stroke_width(2)))
                    .map_err(plot_err)?;
            }
            None => log::warn!("dataset {} has no fitted line to draw", group.label()),
        }
    }

    root.present().map_err(plot_err)?;
    log::info!("wrote regression plot to {}", options.output.display());
    Ok(())
}
