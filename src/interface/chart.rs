use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::analysis::constants::{
    AXIS_PADDING, CHART_HEIGHT, CHART_WIDTH, MARKER_RADIUS, MIN_AXIS_EXTENT,
};
use crate::error::{CalcError, Result};
use crate::models::{ChartData, ChartSeries};

/// Render cost and revenue lines for every series as an SVG image.
///
/// An empty chart still produces a file with bare axes.
pub fn render_chart<P: AsRef<Path>>(chart: &ChartData, path: P) -> Result<()> {
    let ranges = chart_ranges(chart)?;
    draw(chart, ranges, path.as_ref()).map_err(|e| CalcError::Chart(e.to_string()))?;
    debug!(path = %path.as_ref().display(), series = chart.series.len(), "Rendered chart");
    Ok(())
}

/// Axis extent covering `min..=max` with some headroom.
fn axis_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span < f64::EPSILON {
        (min, min + MIN_AXIS_EXTENT)
    } else {
        (min, max + span * AXIS_PADDING)
    }
}

/// Quantity and amount axis ranges, each including zero.
///
/// Fails on any non-finite sample or range.
pub fn chart_ranges(data: &ChartData) -> Result<AxisRanges> {
    if !data.series.iter().all(ChartSeries::is_finite) {
        return Err(CalcError::Chart("series contains non-finite values".to_string()));
    }

    let x = axis_range(data.min_quantity(), data.max_quantity());
    let y = axis_range(data.min_amount(), data.max_amount());

    if [x.0, x.1, y.0, y.1].iter().any(|v| !v.is_finite()) {
        return Err(CalcError::Chart(format!(
            "axis range is not finite: x {:?}, y {:?}",
            x, y
        )));
    }

    Ok(AxisRanges { x, y })
}

/// Plot extents as `(min, max)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRanges {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

fn draw(
    data: &ChartData,
    ranges: AxisRanges,
    path: &Path,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = ranges.x;
    let (y_min, y_max) = ranges.y;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Break-Even Analysis / Análisis de Punto de Equilibrio",
            ("sans-serif", 28).into_font(),
        )
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Quantity / Cantidad")
        .y_desc("Amount ($) / Monto ($)")
        .draw()?;

    for (i, series) in data.series.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();

        chart
            .draw_series(LineSeries::new(
                series
                    .quantities
                    .iter()
                    .copied()
                    .zip(series.total_costs.iter().copied()),
                color.stroke_width(2),
            ))?
            .label(format!("Total cost / Costo total - {}", series.name))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

        chart
            .draw_series(LineSeries::new(
                series
                    .quantities
                    .iter()
                    .copied()
                    .zip(series.revenues.iter().copied()),
                color.mix(0.6).stroke_width(4),
            ))?
            .label(format!("Revenue / Ingresos - {}", series.name))
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.mix(0.6).stroke_width(4))
            });

        let (bx, by) = series.break_even;
        chart.draw_series(std::iter::once(Circle::new(
            (bx, by),
            MARKER_RADIUS,
            color.filled(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            format!("{} ({:.2}, {:.2})", series.name, bx, by),
            (bx, by),
            ("sans-serif", 14).into_font(),
        )))?;
    }

    if !data.is_empty() {
        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
