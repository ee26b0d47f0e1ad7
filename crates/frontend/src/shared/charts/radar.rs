use super::{points_attr, Legend, Point};
use contracts::shared::charts::{nice_ceiling, ChartData};
use leptos::prelude::*;
use std::f64::consts::PI;

const CENTER: f64 = 120.0;
const RADIUS: f64 = 90.0;

/// Vertex of axis `index` (of `count`) at `value / max` of the radius.
/// Axis 0 points straight up; the rest follow clockwise.
pub fn radar_point(index: usize, count: usize, value: f64, max: f64) -> Point {
    let count = count.max(1) as f64;
    let angle = -PI / 2.0 + 2.0 * PI * index as f64 / count;
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    (
        CENTER + RADIUS * ratio * angle.cos(),
        CENTER + RADIUS * ratio * angle.sin(),
    )
}

#[component]
pub fn RadarChart(data: ChartData) -> impl IntoView {
    let max = nice_ceiling(data.max_value());
    let axes = data.rows.len();

    let rings = [0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|ratio| {
            let ring: Vec<Point> = (0..axes).map(|i| radar_point(i, axes, ratio * max, max)).collect();
            view! { <polygon class="chart__grid" points=points_attr(&ring) fill="none" /> }
        })
        .collect_view();

    let labels = data
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (x, y) = radar_point(i, axes, max * 1.15, max * 1.15);
            view! { <text class="chart__label" x=x y=y text-anchor="middle">{label.to_string()}</text> }
        })
        .collect_view();

    let polygons = data
        .series
        .iter()
        .enumerate()
        .map(|(s, series)| {
            let shape: Vec<Point> = data
                .column(s)
                .into_iter()
                .enumerate()
                .map(|(i, v)| radar_point(i, axes, v, max))
                .collect();
            view! {
                <polygon
                    points=points_attr(&shape)
                    fill=series.color.clone()
                    fill-opacity="0.3"
                    stroke=series.color.clone()
                />
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--radar">
            <svg class="chart__svg" viewBox="0 0 240 240">
                {rings}
                {polygons}
                {labels}
            </svg>
            <Legend series=data.series.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radar_point() {
        let (x, y) = radar_point(0, 4, 100.0, 100.0);
        assert!((x - CENTER).abs() < 1e-9);
        assert!((y - (CENTER - RADIUS)).abs() < 1e-9);

        let (x, y) = radar_point(1, 4, 50.0, 100.0);
        assert!((x - (CENTER + RADIUS / 2.0)).abs() < 1e-9);
        assert!((y - CENTER).abs() < 1e-9);

        assert_eq!(radar_point(2, 5, 10.0, 0.0), (CENTER, CENTER));
    }
}
