use crate::domain::common::{CategoryChip, Record};
use crate::shared::filter::category_chips;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::record_id!(
    /// Уникальный идентификатор сотрудника
    TeamMemberId
);

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Design,
    Development,
    Marketing,
    Management,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Design,
        Department::Development,
        Department::Marketing,
        Department::Management,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Department::Design => "design",
            Department::Development => "development",
            Department::Marketing => "marketing",
            Department::Management => "management",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Department::Design => "Design",
            Department::Development => "Development",
            Department::Marketing => "Marketing",
            Department::Management => "Management",
        }
    }
}

/// Presence indicator shown as a dot on the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

impl Presence {
    pub fn id(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub role: String,
    pub department: Department,
    pub avatar: String,
    pub performance: u32,
    pub tasks: u32,
    pub availability: String,
    pub skills: Vec<String>,
    #[serde(rename = "recentActivity")]
    pub recent_activity: String,
    pub presence: Presence,
    pub email: String,
    pub location: String,
    pub projects: Vec<String>,
}

impl TeamMember {
    /// Initials for the avatar fallback: `Sarah Chen` → `SC`.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

impl Record for TeamMember {
    type Id = TeamMemberId;

    fn id(&self) -> TeamMemberId {
        self.id
    }

    fn category(&self) -> &str {
        self.department.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.role.as_str()]
    }
}

/// Department chips; counts come from `members`.
pub fn departments(members: &[TeamMember]) -> Vec<CategoryChip> {
    let defs: Vec<(&str, &str)> = Department::ALL
        .iter()
        .map(|d| (d.id(), d.label()))
        .collect();
    category_chips(members, "All Teams", &defs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_team_member::sample_data::team_members;
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_filter_by_department_and_role() {
        let members = team_members();
        let result = filter_records(&members, &FilterCriterion::new("development", "data"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Sophia Kim");
    }

    #[test]
    fn test_search_matches_name_or_role() {
        let members = team_members();
        let by_name = filter_records(&members, &FilterCriterion::all().with_query("sarah"));
        assert_eq!(by_name.len(), 1);
        let by_role = filter_records(&members, &FilterCriterion::all().with_query("MANAGER"));
        let names: Vec<&str> = by_role.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Emma Watson", "James Wilson"]);
    }

    #[test]
    fn test_departments_counts() {
        let chips = departments(&team_members());
        assert_eq!(chips[0].id, "all");
        assert_eq!(chips[0].count, 5);
        let dev = chips.iter().find(|c| c.id == "development").unwrap();
        assert_eq!(dev.count, 2);
    }

    #[test]
    fn test_initials() {
        assert_eq!(team_members()[0].initials(), "SC");
    }
}
