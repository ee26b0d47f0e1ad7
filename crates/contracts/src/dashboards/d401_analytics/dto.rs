use crate::shared::charts::{ChartData, ChartRow, Series, PALETTE};

/// Headcount with hires and departures per month.
pub fn employee_growth() -> ChartData {
    ChartData::new(
        "month",
        vec![
            Series::new("employees", "Employees", PALETTE[0]),
            Series::new("hired", "Hired", PALETTE[1]),
            Series::new("left", "Left", PALETTE[4]),
        ],
        vec![
            ChartRow::new("Jan", &[200.0, 15.0, 5.0]),
            ChartRow::new("Feb", &[210.0, 20.0, 8.0]),
            ChartRow::new("Mar", &[222.0, 18.0, 6.0]),
            ChartRow::new("Apr", &[234.0, 25.0, 10.0]),
            ChartRow::new("May", &[249.0, 22.0, 7.0]),
            ChartRow::new("Jun", &[264.0, 30.0, 12.0]),
        ],
    )
}

/// Radar axes are departments; one polygon per series.
pub fn department_performance() -> ChartData {
    ChartData::new(
        "department",
        vec![
            Series::new("performance", "Performance", PALETTE[0]),
            Series::new("satisfaction", "Satisfaction", PALETTE[1]),
            Series::new("retention", "Retention", PALETTE[2]),
        ],
        vec![
            ChartRow::new("Engineering", &[85.0, 90.0, 95.0]),
            ChartRow::new("Marketing", &[78.0, 85.0, 88.0]),
            ChartRow::new("Sales", &[92.0, 88.0, 90.0]),
            ChartRow::new("HR", &[88.0, 92.0, 94.0]),
            ChartRow::new("Support", &[82.0, 87.0, 89.0]),
        ],
    )
}

pub fn salary_distribution() -> ChartData {
    ChartData::new(
        "range",
        vec![Series::new("count", "Employees", PALETTE[0])],
        vec![
            ChartRow::new("20-30k", &[45.0]),
            ChartRow::new("30-40k", &[85.0]),
            ChartRow::new("40-50k", &[65.0]),
            ChartRow::new("50-60k", &[95.0]),
            ChartRow::new("60k+", &[35.0]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::nice_ceiling;

    #[test]
    fn test_growth_is_cumulative() {
        let headcount = employee_growth().column(0);
        assert!(headcount.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(nice_ceiling(employee_growth().max_value()), 500.0);
    }

    #[test]
    fn test_radar_axes() {
        let data = department_performance();
        assert_eq!(data.labels().len(), 5);
        assert_eq!(data.column(2)[0], 95.0);
        assert_eq!(salary_distribution().max_value(), 95.0);
    }
}
