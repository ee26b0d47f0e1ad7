//! SVG chart rendering for [`ChartData`](contracts::shared::charts::ChartData).
//!
//! Geometry lives in plain functions so it can be tested off the browser;
//! the components only turn coordinates into markup.

pub mod bar;
pub mod donut;
pub mod line;
pub mod radar;

pub use bar::BarChart;
pub use donut::DonutChart;
pub use line::LineChart;
pub use radar::RadarChart;

use contracts::shared::charts::Series;
use leptos::prelude::*;

pub const VIEW_W: f64 = 400.0;
pub const VIEW_H: f64 = 240.0;
pub const PAD: f64 = 32.0;

pub type Point = (f64, f64);

/// Maps `value` in `[0, max]` to a y coordinate (0 at the bottom edge).
pub fn scale_y(value: f64, max: f64) -> f64 {
    let max = if max > 0.0 { max } else { 1.0 };
    let ratio = (value / max).clamp(0.0, 1.0);
    VIEW_H - PAD - ratio * (VIEW_H - 2.0 * PAD)
}

/// X coordinate of the `index`-th of `count` evenly spaced positions.
pub fn scale_x(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return VIEW_W / 2.0;
    }
    PAD + index as f64 * (VIEW_W - 2.0 * PAD) / (count - 1) as f64
}

pub fn line_points(values: &[f64], max: f64) -> Vec<Point> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| (scale_x(i, values.len()), scale_y(*v, max)))
        .collect()
}

/// `points` attribute of a `<polyline>` / `<polygon>`.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path under a line, down to the x axis.
pub fn area_path(points: &[Point]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline = VIEW_H - PAD;
    let mut d = format!("M{:.1},{:.1}", first.0, baseline);
    for (x, y) in points {
        d.push_str(&format!(" L{:.1},{:.1}", x, y));
    }
    d.push_str(&format!(" L{:.1},{:.1} Z", last.0, baseline));
    d
}

/// Horizontal grid values: five evenly spaced ticks from 0 to `max`.
pub fn y_ticks(max: f64) -> Vec<f64> {
    (0..=4).map(|i| max * f64::from(i) / 4.0).collect()
}

#[component]
pub fn Legend(series: Vec<Series>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {series
                .into_iter()
                .map(|s| view! {
                    <span class="chart-legend__item">
                        <span class="chart-legend__swatch" style=format!("background: {}", s.color)></span>
                        {s.label}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_edges() {
        assert_eq!(scale_y(0.0, 20.0), VIEW_H - PAD);
        assert_eq!(scale_y(20.0, 20.0), PAD);
        assert_eq!(scale_y(40.0, 20.0), PAD);
        assert_eq!(scale_y(5.0, 0.0), PAD);
        assert_eq!(scale_x(0, 6), PAD);
        assert_eq!(scale_x(5, 6), VIEW_W - PAD);
        assert_eq!(scale_x(0, 1), VIEW_W / 2.0);
    }

    #[test]
    fn test_points_attr() {
        let points = line_points(&[0.0, 10.0], 10.0);
        assert_eq!(points_attr(&points), "32.0,208.0 368.0,32.0");
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let points = line_points(&[5.0, 10.0, 0.0], 10.0);
        let d = area_path(&points);
        assert!(d.starts_with("M32.0,208.0 L32.0,120.0"));
        assert!(d.ends_with("L368.0,208.0 Z"));
        assert_eq!(area_path(&[]), "");
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(20.0), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
    }
}
