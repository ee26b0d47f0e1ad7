use crate::shared::charts::{ChartData, ChartRow, Series, Slice, PALETTE};
use serde::{Deserialize, Serialize};

/// Entry of the "Recent Activities" feed on the overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub title: String,
    pub when: String,
    /// Stagger step; the n-th item appears `n * 200` ms after mount.
    pub order: u32,
}

/// Project timeline: completed / ongoing / delayed projects per month.
pub fn project_timeline() -> ChartData {
    ChartData::new(
        "month",
        vec![
            Series::new("completed", "Completed", PALETTE[0]),
            Series::new("ongoing", "Ongoing", PALETTE[1]),
            Series::new("delayed", "Delayed", PALETTE[2]),
        ],
        vec![
            ChartRow::new("Jan", &[12.0, 8.0, 3.0]),
            ChartRow::new("Feb", &[15.0, 10.0, 2.0]),
            ChartRow::new("Mar", &[18.0, 7.0, 4.0]),
            ChartRow::new("Apr", &[14.0, 12.0, 1.0]),
            ChartRow::new("May", &[20.0, 9.0, 2.0]),
            ChartRow::new("Jun", &[17.0, 11.0, 3.0]),
        ],
    )
}

/// Team distribution pie.
pub fn team_performance() -> Vec<Slice> {
    vec![
        Slice::new("Frontend", 30.0, PALETTE[0]),
        Slice::new("Backend", 25.0, PALETTE[1]),
        Slice::new("DevOps", 15.0, PALETTE[2]),
        Slice::new("Design", 20.0, PALETTE[3]),
        Slice::new("QA", 10.0, PALETTE[4]),
    ]
}

pub fn recent_activities() -> Vec<ActivityItem> {
    (1..=3)
        .map(|order| ActivityItem {
            title: "Project milestone completed".to_string(),
            when: "2 hours ago".to_string(),
            order,
        })
        .collect()
}

pub const QUICK_ACTIONS: [&str; 3] = ["Create Project", "Add Team Member", "Schedule Meeting"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::slice_fractions;

    #[test]
    fn test_timeline_shape() {
        let data = project_timeline();
        assert_eq!(data.series.len(), 3);
        assert!(data.rows.iter().all(|r| r.values.len() == 3));
        assert_eq!(data.max_value(), 20.0);
    }

    #[test]
    fn test_team_distribution_sums_to_one() {
        let total: f64 = slice_fractions(&team_performance()).iter().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
