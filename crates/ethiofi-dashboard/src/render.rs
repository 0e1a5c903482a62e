//! HTML page rendering

use crate::forecast::Scenario;
use crate::view::{DashboardView, TargetRate, TargetStatus};
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:0;display:flex}\
aside{width:240px;padding:1.5rem;background:#f0f2f6;min-height:100vh}\
main{flex:1;padding:1.5rem 2rem}\
.metrics{display:flex;gap:2rem}\
.metric{flex:1}.metric .label{color:#555;font-size:.9rem}.metric .value{font-size:2rem}\
table{border-collapse:collapse}td,th{border:1px solid #ddd;padding:.3rem .8rem;text-align:right}\
progress{width:100%;height:1.2rem}";

/// Render the full dashboard page
///
/// `chart_svg` is embedded inline.
pub fn render_page(view: &DashboardView, target: TargetRate, chart_svg: &str) -> String {
    let mut html = String::with_capacity(chart_svg.len() + 8 * 1024);

    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<title>Ethiopia Financial Inclusion Dashboard</title>");
    let _ = write!(html, "<style>{}</style></head><body>", STYLE);

    html.push_str(&controls(view.scenario, target));

    html.push_str("<main><h1>Ethiopia Financial Inclusion Forecast Dashboard</h1>");
    html.push_str("<p>Forecasting financial inclusion (Account Ownership) for 2025&ndash;2027</p><hr>");

    html.push_str("<h2>Overview</h2>");
    html.push_str(&metrics(view));

    html.push_str("<h2>Forecast Scenarios</h2>");
    html.push_str(chart_svg);

    html.push_str("<h2>Scenario Comparison Table</h2>");
    html.push_str(&comparison_table(view));

    html.push_str("<h2>Progress Toward Target</h2>");
    let _ = write!(
        html,
        "<progress max=\"1\" value=\"{:.4}\"></progress><p class=\"progress-message\">{}</p>",
        view.progress,
        view.progress_message()
    );

    html.push_str("<h2>Download Data</h2>");
    html.push_str(
        "<p><a href=\"/download\" download=\"task4_access_forecast.csv\">Download Forecast Data (CSV)</a></p>",
    );

    html.push_str("</main></body></html>");
    html
}

fn controls(selected: Scenario, target: TargetRate) -> String {
    let mut html = String::from("<aside><h2>Controls</h2><form method=\"get\" action=\"/\">");
    html.push_str("<label for=\"scenario\">Select Scenario</label><br><select id=\"scenario\" name=\"scenario\">");
    for scenario in Scenario::ALL {
        let marker = if scenario == selected { " selected" } else { "" };
        let _ = write!(
            html,
            "<option value=\"{}\"{}>{}</option>",
            scenario.as_str(),
            marker,
            scenario.as_str()
        );
    }
    html.push_str("</select><br><br>");
    let _ = write!(
        html,
        "<label for=\"target\">Target Financial Inclusion (%)</label><br>\
         <input type=\"range\" id=\"target\" name=\"target\" min=\"{}\" max=\"{}\" value=\"{}\" \
         oninput=\"this.nextElementSibling.value=this.value\"><output>{}</output><br><br>",
        TargetRate::MIN,
        TargetRate::MAX,
        target.percent(),
        target.percent()
    );
    html.push_str("<button type=\"submit\">Update</button></form></aside>");
    html
}

fn metrics(view: &DashboardView) -> String {
    let (status_label, status_value) = match view.status {
        TargetStatus::Achieved => ("Target Status", "Achieved".to_string()),
        TargetStatus::Gap(gap) => ("Gap to Target", format!("{:.1} pp", gap)),
    };

    let mut html = String::from("<div class=\"metrics\">");
    metric(&mut html, "Latest Year", &view.latest_year.to_string());
    metric(
        &mut html,
        &format!("{} Projection ({})", view.scenario.label(), view.latest_year),
        &format!("{:.1}%", view.latest_value),
    );
    metric(&mut html, status_label, &status_value);
    html.push_str("</div>");
    html
}

fn metric(html: &mut String, label: &str, value: &str) {
    let _ = write!(
        html,
        "<div class=\"metric\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
        label, value
    );
}

fn comparison_table(view: &DashboardView) -> String {
    let mut html = String::from(
        "<table><thead><tr><th>year</th><th>base</th><th>optimistic</th><th>pessimistic</th><th>Range</th></tr></thead><tbody>",
    );
    for row in &view.comparison {
        let _ = write!(
            html,
            "<tr><td>{:.1}</td><td>{:.1}</td><td>{:.1}</td><td>{:.1}</td><td>{:.1}</td></tr>",
            row.year as f64, row.base, row.optimistic, row.pessimistic, row.range
        );
    }
    html.push_str("</tbody></table>");
    html
}
