use crate::domain::common::{CategoryChip, Record};
use crate::shared::filter::category_chips;
use crate::shared::metric_value::MetricValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::record_id!(ProjectId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "critical")]
    Critical,
    #[serde(rename = "onHold")]
    OnHold,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Active,
        ProjectCategory::Completed,
        ProjectCategory::Critical,
        ProjectCategory::OnHold,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ProjectCategory::Active => "active",
            ProjectCategory::Completed => "completed",
            ProjectCategory::Critical => "critical",
            ProjectCategory::OnHold => "onHold",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Active => "Active",
            ProjectCategory::Completed => "Completed",
            ProjectCategory::Critical => "Critical",
            ProjectCategory::OnHold => "On Hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub category: ProjectCategory,
    pub priority: String,
    /// Completion in percent, `0..=100`.
    pub completion: u32,
    pub team: u32,
    pub deadline: NaiveDate,
    pub budget: MetricValue,
    pub roi: MetricValue,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
    /// Gradient accent class suffix.
    pub accent: String,
    pub description: String,
    pub milestones: Vec<String>,
}

impl Project {
    /// Index of the milestone in progress, derived from completion.
    pub fn current_milestone(&self) -> Option<usize> {
        if self.milestones.is_empty() || self.completion >= 100 {
            return None;
        }
        let per_step = 100.0 / self.milestones.len() as f64;
        Some(((f64::from(self.completion) / per_step) as usize).min(self.milestones.len() - 1))
    }
}

impl Record for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn category(&self) -> &str {
        self.category.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

pub fn project_categories(projects: &[Project]) -> Vec<CategoryChip> {
    let defs: Vec<(&str, &str)> = ProjectCategory::ALL
        .iter()
        .map(|c| (c.id(), c.label()))
        .collect();
    category_chips(projects, "All Projects", &defs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_project::sample_data::projects;
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_filter_projects() {
        let active = filter_records(&projects(), &FilterCriterion::new("active", ""));
        let ids: Vec<u32> = active.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);

        let on_hold = filter_records(&projects(), &FilterCriterion::new("onHold", "analytics"));
        assert_eq!(on_hold.len(), 1);
        assert_eq!(on_hold[0].title, "AI-Powered Analytics Platform");

        let by_description = filter_records(&projects(), &FilterCriterion::all().with_query("SMART CONTRACTS"));
        assert_eq!(by_description.len(), 1);
    }

    #[test]
    fn test_budget_and_roi_display() {
        let p = &projects()[1];
        assert_eq!(p.budget.to_string(), "$450,000");
        assert_eq!(p.roi.format_signed(), "+40%");
    }

    #[test]
    fn test_current_milestone() {
        let all = projects();
        assert_eq!(all[0].current_milestone(), Some(2));
        assert_eq!(all[1].current_milestone(), Some(0));
        assert_eq!(all[3].current_milestone(), None);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ProjectCategory::OnHold).unwrap();
        assert_eq!(json, r#""onHold""#);
    }
}
