use super::aggregate::{Project, ProjectCategory, ProjectId};
use crate::domain::common::record::owned;
use crate::shared::metric_value::MetricValue;
use chrono::NaiveDate;

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    category: ProjectCategory,
    priority: &str,
    completion: u32,
    team: u32,
    (y, m, d): (i32, u32, u32),
    budget: &str,
    roi: &str,
    tech_stack: &[&str],
    accent: &str,
    description: &str,
    milestones: &[&str],
) -> Project {
    Project {
        id: ProjectId(id),
        title: title.to_string(),
        category,
        priority: priority.to_string(),
        completion,
        team,
        deadline: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        budget: MetricValue::parse_lenient(budget),
        roi: MetricValue::parse_lenient(roi),
        tech_stack: owned(tech_stack),
        accent: accent.to_string(),
        description: description.to_string(),
        milestones: owned(milestones),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Neural Network Integration",
            ProjectCategory::Active,
            "High",
            75,
            8,
            (2024, 6, 15),
            "$120,000",
            "+25%",
            &["Python", "TensorFlow", "AWS"],
            "violet",
            "Implementation of advanced neural networks for predictive analytics",
            &["Data Collection", "Model Training", "Integration Testing"],
        ),
        project(
            2,
            "Quantum Computing Research",
            ProjectCategory::Critical,
            "Critical",
            30,
            12,
            (2024, 7, 1),
            "$450,000",
            "+40%",
            &["Q#", "Python", "CUDA"],
            "rose",
            "Exploring quantum algorithms for optimization problems",
            &["Algorithm Design", "Quantum Circuit Implementation", "Performance Analysis"],
        ),
        project(
            3,
            "Blockchain Implementation",
            ProjectCategory::Active,
            "Medium",
            45,
            6,
            (2024, 8, 30),
            "$180,000",
            "+15%",
            &["Solidity", "Web3.js", "React"],
            "cyan",
            "Development of smart contracts and DApp infrastructure",
            &["Smart Contract Development", "Frontend Integration", "Security Audit"],
        ),
        project(
            4,
            "Cloud Migration",
            ProjectCategory::Completed,
            "Completed",
            100,
            10,
            (2024, 5, 1),
            "$250,000",
            "+30%",
            &["AWS", "Docker", "Kubernetes"],
            "emerald",
            "Complete infrastructure migration to cloud platform",
            &["Architecture Planning", "Data Migration", "Performance Optimization"],
        ),
        project(
            5,
            "AI-Powered Analytics Platform",
            ProjectCategory::OnHold,
            "Medium",
            60,
            7,
            (2024, 9, 15),
            "$200,000",
            "+20%",
            &["Python", "React", "PostgreSQL"],
            "amber",
            "Building an analytics platform with AI-driven insights",
            &["Data Pipeline Setup", "AI Model Integration", "Dashboard Development"],
        ),
    ]
}
