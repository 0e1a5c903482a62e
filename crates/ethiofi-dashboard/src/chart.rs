//! Forecast scenario chart

use crate::error::DashboardError;
use crate::forecast::{ForecastTable, Scenario};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const SIZE: (u32, u32) = (1000, 480);

fn chart_err(e: impl std::fmt::Display) -> DashboardError {
    DashboardError::Chart(e.to_string())
}

fn series_color(scenario: Scenario) -> RGBColor {
    match scenario {
        Scenario::Base => RGBColor(31, 119, 180),
        Scenario::Optimistic => RGBColor(44, 160, 44),
        Scenario::Pessimistic => RGBColor(214, 39, 40),
    }
}

/// Render the three scenarios and the target line as an SVG document
///
/// Base is drawn solid, the other two dashed; the target is a dashed
/// horizontal line labelled `N% Target`.
pub fn render_forecast_svg(table: &ForecastTable, target: f64) -> Result<String, DashboardError> {
    let first_year = table.rows.iter().map(|r| r.year).min();
    let last_year = table.latest_year();
    let (Some(first_year), Some(last_year)) = (first_year, last_year) else {
        return Err(DashboardError::EmptyForecast);
    };

    let x_range = (first_year as f64 - 0.5)..(last_year as f64 + 0.5);
    let values = table
        .rows
        .iter()
        .flat_map(|r| [r.base, r.optimistic, r.pessimistic])
        .chain([target]);
    let (y_min, y_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let y_range = (y_min - 5.0).max(0.0)..(y_max + 5.0);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                format!("Account Ownership Forecast ({}-{})", first_year, last_year),
                ("sans-serif", 24),
            )
            .margin(20)
            .x_label_area_size(45)
            .y_label_area_size(65)
            .build_cartesian_2d(x_range.clone(), y_range)
            .map_err(chart_err)?;

        chart
            .configure_mesh()
            .x_desc("Year")
            .y_desc("Account Ownership (%)")
            .x_labels(table.rows.len().max(2))
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .draw()
            .map_err(chart_err)?;

        for scenario in Scenario::ALL {
            let color = series_color(scenario);
            let points: Vec<(f64, f64)> = table
                .rows
                .iter()
                .map(|r| (r.year as f64, scenario.value(r)))
                .collect();

            let anno = if scenario == Scenario::Base {
                chart
                    .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
                    .map_err(chart_err)?
            } else {
                chart
                    .draw_series(DashedLineSeries::new(
                        points.clone(),
                        6,
                        4,
                        color.stroke_width(2),
                    ))
                    .map_err(chart_err)?
            };
            anno.label(scenario.label()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });

            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                .map_err(chart_err)?;
        }

        chart
            .draw_series(DashedLineSeries::new(
                vec![(x_range.start, target), (x_range.end, target)],
                8,
                5,
                BLACK.stroke_width(1),
            ))
            .map_err(chart_err)?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{}% Target", target),
                (x_range.end, target),
                TextStyle::from(("sans-serif", 14).into_font())
                    .pos(Pos::new(HPos::Right, VPos::Bottom)),
            )))
            .map_err(chart_err)?;

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
    }

    Ok(svg)
}
