use super::{area_path, line_points, points_attr, scale_x, scale_y, y_ticks, Legend, PAD, VIEW_H, VIEW_W};
use contracts::shared::charts::{nice_ceiling, ChartData};
use leptos::prelude::*;

/// Multi-series line chart; `area` fills the region under each line.
#[component]
pub fn LineChart(
    data: ChartData,
    #[prop(optional)]
    area: bool,
) -> impl IntoView {
    let max = nice_ceiling(data.max_value());
    let count = data.rows.len();

    let grid = y_ticks(max)
        .into_iter()
        .map(|tick| {
            let y = scale_y(tick, max);
            view! {
                <g class="chart__grid">
                    <line x1=PAD x2={VIEW_W - PAD} y1=y y2=y />
                    <text x={PAD - 6.0} y={y + 4.0} text-anchor="end">{format!("{}", tick)}</text>
                </g>
            }
        })
        .collect_view();

    let labels = data
        .labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <text class="chart__label" x={scale_x(i, count)} y={VIEW_H - PAD + 18.0} text-anchor="middle">
                    {label.to_string()}
                </text>
            }
        })
        .collect_view();

    let lines = data
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let points = line_points(&data.column(i), max);
            let fill = area.then(|| {
                view! { <path d=area_path(&points) fill=series.color.clone() fill-opacity="0.25" stroke="none" /> }
            });
            view! {
                <g class="chart__series">
                    {fill}
                    <polyline
                        points=points_attr(&points)
                        fill="none"
                        stroke=series.color.clone()
                        stroke-width="2"
                    />
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart__svg" viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H) preserveAspectRatio="none">
                {grid}
                {lines}
                {labels}
            </svg>
            <Legend series=data.series.clone() />
        </div>
    }
}
