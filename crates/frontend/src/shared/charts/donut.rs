use contracts::shared::charts::{slice_fractions, Slice};
use leptos::prelude::*;
use std::f64::consts::PI;

const RADIUS: f64 = 70.0;

/// `(dash length, dash offset)` per slice for `stroke-dasharray` arcs.
pub fn donut_dashes(slices: &[Slice], circumference: f64) -> Vec<(f64, f64)> {
    let mut start = 0.0;
    slice_fractions(slices)
        .into_iter()
        .map(|fraction| {
            let dash = fraction * circumference;
            let offset = -start;
            start += dash;
            (dash, offset)
        })
        .collect()
}

#[component]
pub fn DonutChart(slices: Vec<Slice>) -> impl IntoView {
    let circumference = 2.0 * PI * RADIUS;
    let arcs = donut_dashes(&slices, circumference)
        .into_iter()
        .zip(slices.iter())
        .map(|((dash, offset), slice)| {
            view! {
                <circle
                    cx="100" cy="100" r=RADIUS
                    fill="none"
                    stroke=slice.color.clone()
                    stroke-width="28"
                    stroke-dasharray=format!("{:.2} {:.2}", dash, circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                    transform="rotate(-90 100 100)"
                />
            }
        })
        .collect_view();

    let legend = slices
        .iter()
        .map(|s| view! {
            <span class="chart-legend__item">
                <span class="chart-legend__swatch" style=format!("background: {}", s.color)></span>
                {format!("{} ({})", s.label, s.value)}
            </span>
        })
        .collect_view();

    view! {
        <div class="chart chart--donut">
            <svg class="chart__svg" viewBox="0 0 200 200">{arcs}</svg>
            <div class="chart-legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_cover_circle() {
        let slices = vec![
            Slice::new("a", 30.0, "#1"),
            Slice::new("b", 50.0, "#2"),
            Slice::new("c", 20.0, "#3"),
        ];
        let dashes = donut_dashes(&slices, 100.0);
        let total: f64 = dashes.iter().map(|(d, _)| d).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(dashes[0].1, 0.0);
        assert!((dashes[2].1 + 80.0).abs() < 1e-9);
    }
}
