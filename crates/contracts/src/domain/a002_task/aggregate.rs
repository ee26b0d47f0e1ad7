use crate::domain::common::{CategoryChip, Record};
use crate::shared::filter::category_chips;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::record_id!(TaskId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    pub fn id(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskPriority::High => "priority priority--high",
            TaskPriority::Medium => "priority priority--medium",
            TaskPriority::Low => "priority priority--low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Badge text: `in-progress` → `in progress`.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "badge badge--warning",
            TaskStatus::InProgress => "badge badge--info",
            TaskStatus::Completed => "badge badge--success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub assignee: Assignee,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    /// Completion in percent, `0..=100`.
    pub progress: u32,
    pub tags: Vec<String>,
}

impl Task {
    pub fn due_label(&self) -> String {
        self.due_date.format("%b %d, %Y").to_string()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due_date < today
    }
}

impl Record for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }

    fn category(&self) -> &str {
        self.status.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

pub fn task_statuses(tasks: &[Task]) -> Vec<CategoryChip> {
    let defs = [
        ("pending", "Pending"),
        ("in-progress", "In Progress"),
        ("completed", "Completed"),
    ];
    category_chips(tasks, "All Tasks", &defs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_task::sample_data::tasks;
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_filter_by_status() {
        let result = filter_records(&tasks(), &FilterCriterion::new("in-progress", ""));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Update Employee Handbook");
    }

    #[test]
    fn test_search_description() {
        let result = filter_records(&tasks(), &FilterCriterion::all().with_query("onboarding"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, TaskId(3));
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 26).unwrap();
        let overdue: Vec<u32> = tasks()
            .iter()
            .filter(|t| t.is_overdue(today))
            .map(|t| t.id.value())
            .collect();
        assert_eq!(overdue, vec![1]);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let task = tasks().into_iter().find(|t| t.id.value() == 1).unwrap();
        assert!(!task.is_overdue(task.due_date));
        assert!(task.is_overdue(task.due_date.succ_opt().unwrap()));
    }

    #[test]
    fn test_status_serde() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, r#""in-progress""#);
        assert_eq!(tasks()[0].due_label(), "Mar 25, 2024");
    }

    #[test]
    fn test_status_chips() {
        let chips = task_statuses(&tasks());
        let counts: Vec<usize> = chips.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![3, 1, 1, 1]);
    }
}
