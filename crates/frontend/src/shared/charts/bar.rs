use super::{scale_y, y_ticks, Legend, PAD, VIEW_H, VIEW_W};
use contracts::shared::charts::{nice_ceiling, ChartData};
use leptos::prelude::*;

/// `(x, y, width, height)` of every bar, grouped by row then series.
pub fn bar_rects(data: &ChartData, max: f64) -> Vec<(f64, f64, f64, f64)> {
    let rows = data.rows.len().max(1) as f64;
    let series = data.series.len().max(1) as f64;
    let slot = (VIEW_W - 2.0 * PAD) / rows;
    let width = slot * 0.7 / series;
    let baseline = VIEW_H - PAD;

    data.rows
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            (0..data.series.len()).map(move |s| {
                let value = row.values.get(s).copied().unwrap_or(0.0);
                let x = PAD + r as f64 * slot + slot * 0.15 + s as f64 * width;
                let y = scale_y(value, max);
                (x, y, width, baseline - y)
            })
        })
        .collect()
}

#[component]
pub fn BarChart(data: ChartData) -> impl IntoView {
    let max = nice_ceiling(data.max_value());
    let series_count = data.series.len().max(1);
    let slot = (VIEW_W - 2.0 * PAD) / data.rows.len().max(1) as f64;
    let colors: Vec<String> = data.series.iter().map(|s| s.color.clone()).collect();

    let bars = bar_rects(&data, max)
        .into_iter()
        .enumerate()
        .map(|(i, (x, y, w, h))| {
            let color = colors.get(i % series_count).cloned().unwrap_or_default();
            view! { <rect x=x y=y width=w height=h rx="4" fill=color /> }
        })
        .collect_view();

    let grid = y_ticks(max)
        .into_iter()
        .map(|tick| {
            let y = scale_y(tick, max);
            view! { <line class="chart__grid" x1=PAD x2={VIEW_W - PAD} y1=y y2=y /> }
        })
        .collect_view();

    let labels = data
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = PAD + (i as f64 + 0.5) * slot;
            view! {
                <text class="chart__label" x=x y={VIEW_H - PAD + 18.0} text-anchor="middle">{label.to_string()}</text>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H) preserveAspectRatio="none">
                {grid}
                {bars}
                {labels}
            </svg>
            <Legend series=data.series.clone() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::charts::{ChartRow, Series};

    #[test]
    fn test_bar_rects() {
        let data = ChartData::new(
            "range",
            vec![Series::new("count", "Count", "#000")],
            vec![ChartRow::new("a", &[50.0]), ChartRow::new("b", &[100.0])],
        );
        let rects = bar_rects(&data, 100.0);
        assert_eq!(rects.len(), 2);
        let (x0, _, w0, h0) = rects[0];
        let (x1, y1, _, h1) = rects[1];
        assert!(x1 > x0 + w0);
        assert_eq!(y1, PAD);
        assert!((h1 - 2.0 * h0).abs() < 1e-9);
    }
}
