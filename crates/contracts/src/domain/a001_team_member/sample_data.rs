use super::aggregate::{Department, Presence, TeamMember, TeamMemberId};
use crate::domain::common::record::owned;

#[allow(clippy::too_many_arguments)]
fn member(
    id: u32,
    name: &str,
    role: &str,
    department: Department,
    avatar: &str,
    performance: u32,
    tasks: u32,
    availability: &str,
    skills: &[&str],
    recent_activity: &str,
    presence: Presence,
    email: &str,
    location: &str,
    projects: &[&str],
) -> TeamMember {
    TeamMember {
        id: TeamMemberId(id),
        name: name.to_string(),
        role: role.to_string(),
        department,
        avatar: avatar.to_string(),
        performance,
        tasks,
        availability: availability.to_string(),
        skills: owned(skills),
        recent_activity: recent_activity.to_string(),
        presence,
        email: email.to_string(),
        location: location.to_string(),
        projects: owned(projects),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            1,
            "Sarah Chen",
            "Senior UI Designer",
            Department::Design,
            "https://randomuser.me/api/portraits/women/1.jpg",
            98,
            24,
            "Available",
            &["UI/UX", "Figma", "Adobe XD", "Prototyping"],
            "2 hours ago",
            Presence::Online,
            "sarah.chen@company.com",
            "San Francisco, CA",
            &["Mobile App Redesign", "Website Revamp"],
        ),
        member(
            2,
            "Michael Rodriguez",
            "Full Stack Developer",
            Department::Development,
            "https://randomuser.me/api/portraits/men/2.jpg",
            95,
            18,
            "In Meeting",
            &["React", "Node.js", "Python", "AWS"],
            "30 minutes ago",
            Presence::Busy,
            "michael.r@company.com",
            "Austin, TX",
            &["API Integration", "Database Migration"],
        ),
        member(
            3,
            "Emma Watson",
            "Marketing Manager",
            Department::Marketing,
            "https://randomuser.me/api/portraits/women/3.jpg",
            92,
            15,
            "Available",
            &["Campaign Management", "Social Media", "Content Strategy"],
            "1 hour ago",
            Presence::Online,
            "emma.w@company.com",
            "New York, NY",
            &["Q4 Marketing Campaign", "Brand Refresh"],
        ),
        member(
            4,
            "James Wilson",
            "Product Manager",
            Department::Management,
            "https://randomuser.me/api/portraits/men/4.jpg",
            94,
            32,
            "On Leave",
            &["Product Strategy", "Agile", "User Research"],
            "1 day ago",
            Presence::Offline,
            "james.w@company.com",
            "London, UK",
            &["Product Roadmap", "Feature Planning"],
        ),
        member(
            5,
            "Sophia Kim",
            "Data Scientist",
            Department::Development,
            "https://randomuser.me/api/portraits/women/5.jpg",
            97,
            21,
            "Available",
            &["Python", "Machine Learning", "Data Visualization"],
            "45 minutes ago",
            Presence::Online,
            "sophia.k@company.com",
            "Seattle, WA",
            &["Predictive Analytics", "Data Pipeline"],
        ),
    ]
}
