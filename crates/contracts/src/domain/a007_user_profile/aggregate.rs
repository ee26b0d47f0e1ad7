use crate::domain::common::Record;
use serde::{Deserialize, Serialize};

crate::record_id!(AchievementId);
crate::record_id!(ActivityId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: String,
    pub bio: String,
    pub department: String,
    pub team: String,
    pub manager: String,
}

impl UserProfile {
    /// Label/value rows of the "Basic Information" card.
    pub fn basic_info(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Department", self.department.as_str()),
            ("Team", self.team.as_str()),
            ("Manager", self.manager.as_str()),
            ("Join Date", self.join_date.as_str()),
        ]
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0..=100.
    pub level: u8,
}

impl Skill {
    pub fn bar_width(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub date: String,
    pub description: String,
}

impl Record for Achievement {
    type Id = AchievementId;

    fn id(&self) -> AchievementId {
        self.id
    }

    fn category(&self) -> &str {
        "achievement"
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Project,
    Code,
    Achievement,
}

impl ActivityKind {
    pub fn id(&self) -> &'static str {
        match self {
            ActivityKind::Project => "project",
            ActivityKind::Code => "code",
            ActivityKind::Achievement => "achievement",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Project => "activity",
            ActivityKind::Code => "git-branch",
            ActivityKind::Achievement => "award",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub kind: ActivityKind,
    pub action: String,
    pub target: String,
    pub date: String,
}

impl Record for Activity {
    type Id = ActivityId;

    fn id(&self) -> ActivityId {
        self.id
    }

    fn category(&self) -> &str {
        self.kind.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.action.as_str(), self.target.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_user_profile::sample_data::{achievements, activity, profile, skills};
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_profile_info() {
        let profile = profile();
        assert_eq!(profile.first_name(), "Alexandra");
        let info = profile.basic_info();
        assert_eq!(info[2], ("Manager", "Sarah Chen"));
        assert_eq!(info.len(), 4);
    }

    #[test]
    fn test_skills_sorted_by_level() {
        let skills = skills();
        assert!(skills.windows(2).all(|w| w[0].level >= w[1].level));
        assert_eq!(skills[0].bar_width(), "width: 95%");
    }

    #[test]
    fn test_activity_and_achievements_filter() {
        let code = filter_records(&activity(), &FilterCriterion::new("code", ""));
        assert_eq!(code.len(), 1);
        assert_eq!(code[0].target, "Feature: User Authentication");

        let found = filter_records(&achievements(), &FilterCriterion::all().with_query("library"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Innovation Award");
    }
}
