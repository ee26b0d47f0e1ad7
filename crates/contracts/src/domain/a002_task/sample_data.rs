use super::aggregate::{Assignee, Task, TaskId, TaskPriority, TaskStatus};
use crate::domain::common::record::owned;
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn task(
    id: u32,
    title: &str,
    description: &str,
    (assignee, avatar): (&str, &str),
    priority: TaskPriority,
    status: TaskStatus,
    (y, m, d): (i32, u32, u32),
    progress: u32,
    tags: &[&str],
) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        description: description.to_string(),
        assignee: Assignee {
            name: assignee.to_string(),
            avatar: avatar.to_string(),
        },
        priority,
        status,
        due_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        progress,
        tags: owned(tags),
    }
}

pub fn tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Update Employee Handbook",
            "Review and update company policies and procedures",
            ("Sarah Chen", "https://randomuser.me/api/portraits/women/1.jpg"),
            TaskPriority::High,
            TaskStatus::InProgress,
            (2024, 3, 25),
            75,
            &["Documentation", "HR"],
        ),
        task(
            2,
            "Quarterly Performance Reviews",
            "Conduct performance evaluations for Q1",
            ("Michael Rodriguez", "https://randomuser.me/api/portraits/men/2.jpg"),
            TaskPriority::Medium,
            TaskStatus::Pending,
            (2024, 3, 30),
            30,
            &["HR", "Reviews"],
        ),
        task(
            3,
            "Training Program Development",
            "Create new onboarding materials for technical staff",
            ("Emma Watson", "https://randomuser.me/api/portraits/women/3.jpg"),
            TaskPriority::High,
            TaskStatus::Completed,
            (2024, 3, 20),
            100,
            &["Training", "Development"],
        ),
    ]
}
