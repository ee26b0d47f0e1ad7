use crate::shared::charts::{ChartData, ChartRow, Series, Slice, PALETTE};

pub fn performance_trends() -> ChartData {
    ChartData::new(
        "month",
        vec![
            Series::new("productivity", "Productivity", PALETTE[0]),
            Series::new("engagement", "Engagement", PALETTE[1]),
            Series::new("satisfaction", "Satisfaction", PALETTE[2]),
        ],
        vec![
            ChartRow::new("Jan", &[85.0, 78.0, 82.0]),
            ChartRow::new("Feb", &[88.0, 80.0, 85.0]),
            ChartRow::new("Mar", &[92.0, 85.0, 88.0]),
            ChartRow::new("Apr", &[90.0, 87.0, 86.0]),
            ChartRow::new("May", &[95.0, 89.0, 90.0]),
            ChartRow::new("Jun", &[93.0, 88.0, 89.0]),
        ],
    )
}

pub fn department_metrics() -> Vec<Slice> {
    vec![
        Slice::new("Engineering", 35.0, PALETTE[0]),
        Slice::new("Marketing", 25.0, PALETTE[1]),
        Slice::new("Sales", 20.0, PALETTE[2]),
        Slice::new("HR", 10.0, PALETTE[3]),
        Slice::new("Support", 10.0, PALETTE[4]),
    ]
}

pub fn skills_radar() -> ChartData {
    ChartData::new(
        "skill",
        vec![Series::new("value", "Score", PALETTE[0])],
        vec![
            ChartRow::new("Technical", &[85.0]),
            ChartRow::new("Leadership", &[75.0]),
            ChartRow::new("Communication", &[90.0]),
            ChartRow::new("Problem Solving", &[88.0]),
            ChartRow::new("Teamwork", &[92.0]),
            ChartRow::new("Innovation", &[78.0]),
        ],
    )
}

/// Retained vs. turnover, in percent of headcount.
pub fn retention() -> ChartData {
    ChartData::new(
        "month",
        vec![
            Series::new("retained", "Retained", PALETTE[1]),
            Series::new("turnover", "Turnover", PALETTE[4]),
        ],
        vec![
            ChartRow::new("Jan", &[95.0, 5.0]),
            ChartRow::new("Feb", &[94.0, 6.0]),
            ChartRow::new("Mar", &[96.0, 4.0]),
            ChartRow::new("Apr", &[93.0, 7.0]),
            ChartRow::new("May", &[95.0, 5.0]),
            ChartRow::new("Jun", &[97.0, 3.0]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retention_rows_add_up() {
        assert!(retention()
            .rows
            .iter()
            .all(|row| row.values.iter().sum::<f64>() == 100.0));
    }

    #[test]
    fn test_department_share() {
        let total: f64 = department_metrics().iter().map(|s| s.value).sum();
        assert_eq!(total, 100.0);
        assert_eq!(skills_radar().rows.len(), 6);
        assert_eq!(performance_trends().max_value(), 95.0);
    }
}
