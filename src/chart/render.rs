use super::series::{ChartKind, ChartSeries};
use crate::error::{GhStatsError, Result};
use plotters::element::Pie;
use plotters::prelude::*;
use std::path::Path;

/// Layout and labeling for one rendered chart.
pub struct ChartSpec<'a> {
    pub kind: ChartKind,
    pub legend: &'a str,
    pub title: &'a str,
}

fn chart_err<E: std::fmt::Display>(e: E) -> GhStatsError {
    GhStatsError::Chart(e.to_string())
}

/// Render `series` to an SVG file. Returns false when the chart is skipped:
/// an empty series, or a ranked layout with fewer than two bars, carries no
/// information and produces no output rather than failing.
pub fn render(series: &ChartSeries, spec: &ChartSpec, path: &Path) -> Result<bool> {
    if series.is_empty() {
        return Ok(false);
    }
    match spec.kind {
        ChartKind::Proportional => draw_pie(series, spec, path)?,
        ChartKind::RankedMagnitude => {
            if series.len() < 2 {
                return Ok(false);
            }
            draw_bars(series, spec, path)?;
        }
    }
    Ok(true)
}

fn pick_color(index: usize) -> RGBColor {
    let (r, g, b) = Palette99::COLORS[index % Palette99::COLORS.len()];
    RGBColor(r, g, b)
}

fn draw_pie(series: &ChartSeries, spec: &ChartSpec, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (800, 640)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled(spec.title, ("sans-serif", 24))
        .map_err(chart_err)?;

    let sizes: Vec<f64> = series
        .entries()
        .iter()
        .map(|(_, value)| *value as f64)
        .collect();
    let labels: Vec<String> = series
        .entries()
        .iter()
        .map(|(label, _)| label.clone())
        .collect();
    let colors: Vec<RGBColor> = (0..sizes.len()).map(pick_color).collect();

    let center = (400, 300);
    let radius = 220.0;
    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font());
    root.draw(&pie).map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_bars(series: &ChartSeries, spec: &ChartSpec, path: &Path) -> Result<()> {
    // Largest value on the top row
    let mut rows = series.ranked();
    rows.reverse();
    let count = rows.len();
    let labels: Vec<String> = rows.iter().map(|(label, _)| label.clone()).collect();
    let max = rows.iter().map(|(_, value)| *value).max().unwrap_or(1).max(1);
    // Headroom past the longest bar for its value label
    let x_end = max + max / 7 + 2;

    let longest_label = labels.iter().map(String::len).max().unwrap_or(0);
    let label_area = ((longest_label as u32) * 8).clamp(60, 300);
    // Bar height stays constant regardless of row count
    let height = 120 + 28 * count as u32;

    let root = SVGBackend::new(path, (1200, height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(label_area)
        .build_cartesian_2d(0u64..x_end, (0i32..count as i32).into_segmented())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(count)
        .y_label_formatter(&|y| match y {
            SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => labels
                .get(*index as usize)
                .cloned()
                .unwrap_or_default(),
            SegmentValue::Last => String::new(),
        })
        .x_desc(spec.legend)
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(index, (_, value))| {
            let index = index as i32;
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(index)),
                    (*value, SegmentValue::Exact(index + 1)),
                ],
                BLUE.mix(0.6).filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(chart_err)?;

    // Value labels just past each bar end
    chart
        .draw_series(rows.iter().enumerate().map(|(index, (_, value))| {
            Text::new(
                value.to_string(),
                (*value + max / 50 + 1, SegmentValue::CenterOf(index as i32)),
                ("sans-serif", 14),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
