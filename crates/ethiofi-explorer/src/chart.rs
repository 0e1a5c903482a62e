//! SVG rendering of the account ownership trend

use crate::error::ExplorerError;
use crate::trend::TrendSeries;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const TITLE: &str = "Ethiopia Account Ownership Trend";
const SIZE: (u32, u32) = (1200, 600);

fn chart_err(e: impl std::fmt::Display) -> ExplorerError {
    ExplorerError::Chart(e.to_string())
}

/// Draw `series` as a line chart with point markers and `N%` labels
///
/// `series` must not be empty.
pub fn render_trend(series: &TrendSeries, output: &Path) -> Result<(), ExplorerError> {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.fractional_year(), p.value))
        .collect();
    if points.is_empty() {
        return Err(ExplorerError::Chart("no points to plot".to_string()));
    }

    let x_min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min).floor() - 1.0;
    let x_max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max).ceil() + 1.0;
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max) + 10.0;

    let root = SVGBackend::new(output, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, 0f64..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Account Ownership (%)")
        .x_label_formatter(&|x: &f64| format!("{:.0}", x))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))
        .map_err(chart_err)?;
    chart
        .draw_series(points.iter().map(|&p| Circle::new(p, 6, BLUE.filled())))
        .map_err(chart_err)?;
    chart
        .draw_series(points.iter().map(|&(x, y)| {
            Text::new(
                format!("{}%", y),
                (x, y + 1.0),
                TextStyle::from(("sans-serif", 14).into_font())
                    .pos(Pos::new(HPos::Center, VPos::Bottom)),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
