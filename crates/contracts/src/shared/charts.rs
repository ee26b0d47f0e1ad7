//! Data handed to the chart renderer: rows of numbers plus a field mapping.

use serde::{Deserialize, Serialize};

pub const PALETTE: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff7c43", "#f44336"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl Series {
    pub fn new(key: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// One x-axis position; `values` are aligned with `ChartData::series`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartRow {
    pub fn new(label: &str, values: &[f64]) -> Self {
        Self {
            label: label.to_string(),
            values: values.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub x_field: String,
    pub series: Vec<Series>,
    pub rows: Vec<ChartRow>,
}

impl ChartData {
    pub fn new(x_field: &str, series: Vec<Series>, rows: Vec<ChartRow>) -> Self {
        Self {
            x_field: x_field.to_string(),
            series,
            rows,
        }
    }

    /// Values of one series in row order; missing cells read as 0.
    pub fn column(&self, series_index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.values.get(series_index).copied().unwrap_or(0.0))
            .collect()
    }

    pub fn max_value(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .fold(0.0, f64::max)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.label.as_str()).collect()
    }
}

/// Pie/donut segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Slice {
    pub fn new(label: &str, value: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Share of each slice in `[0, 1]`; all zeros when the total is zero.
pub fn slice_fractions(slices: &[Slice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value.max(0.0)).sum();
    slices
        .iter()
        .map(|s| {
            if total > 0.0 {
                s.value.max(0.0) / total
            } else {
                0.0
            }
        })
        .collect()
}

/// Rounds `max` up to a tidy axis limit (1, 2, 2.5, 5 or 10 times a power of ten).
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> ChartData {
        ChartData::new(
            "month",
            vec![
                Series::new("completed", "Completed", PALETTE[0]),
                Series::new("delayed", "Delayed", PALETTE[2]),
            ],
            vec![
                ChartRow::new("Jan", &[12.0, 3.0]),
                ChartRow::new("Feb", &[15.0]),
            ],
        )
    }

    #[test]
    fn test_column_and_max() {
        let data = timeline();
        assert_eq!(data.column(0), vec![12.0, 15.0]);
        assert_eq!(data.column(1), vec![3.0, 0.0]);
        assert_eq!(data.max_value(), 15.0);
        assert_eq!(data.labels(), vec!["Jan", "Feb"]);
    }

    #[test]
    fn test_slice_fractions() {
        let slices = vec![Slice::new("A", 30.0, "#000"), Slice::new("B", 10.0, "#fff")];
        assert_eq!(slice_fractions(&slices), vec![0.75, 0.25]);
        assert_eq!(slice_fractions(&[Slice::new("A", 0.0, "#000")]), vec![0.0]);
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(15.0), 20.0);
        assert_eq!(nice_ceiling(20.0), 20.0);
        assert_eq!(nice_ceiling(92.0), 100.0);
        assert_eq!(nice_ceiling(264.0), 500.0);
        assert_eq!(nice_ceiling(22.0), 25.0);
    }
}
