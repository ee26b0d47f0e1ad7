use super::aggregate::{Achievement, AchievementId, Activity, ActivityId, ActivityKind, Skill, UserProfile};

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Alexandra Morrison".into(),
        role: "Senior Frontend Developer".into(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=Alexandra".into(),
        email: "alex.morrison@company.com".into(),
        phone: "+1 (555) 123-4567".into(),
        location: "San Francisco, CA".into(),
        join_date: "March 2022".into(),
        bio: "Passionate frontend developer with expertise in React and modern web technologies. \
              Love creating beautiful and intuitive user interfaces."
            .into(),
        department: "Engineering".into(),
        team: "Product Development".into(),
        manager: "Sarah Chen".into(),
    }
}

pub fn skills() -> Vec<Skill> {
    [
        ("React", 95),
        ("JavaScript", 90),
        ("TypeScript", 85),
        ("UI/UX Design", 80),
        ("Node.js", 75),
        ("GraphQL", 70),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect()
}

pub fn achievements() -> Vec<Achievement> {
    [
        (
            1,
            "Employee of the Month",
            "February 2024",
            "Recognized for exceptional contribution to the Analytics Dashboard project",
        ),
        (
            2,
            "Innovation Award",
            "December 2023",
            "Developed a new component library that reduced development time by 40%",
        ),
        (
            3,
            "Perfect Attendance",
            "2023",
            "Maintained 100% attendance and punctuality throughout the year",
        ),
    ]
    .into_iter()
    .map(|(id, title, date, description)| Achievement {
        id: AchievementId(id),
        title: title.to_string(),
        date: date.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn activity() -> Vec<Activity> {
    [
        (1, ActivityKind::Project, "Completed", "Analytics Dashboard Phase 2", "2 days ago"),
        (2, ActivityKind::Code, "Merged", "Feature: User Authentication", "1 week ago"),
        (3, ActivityKind::Achievement, "Earned", "Advanced React Certification", "2 weeks ago"),
    ]
    .into_iter()
    .map(|(id, kind, action, target, date)| Activity {
        id: ActivityId(id),
        kind,
        action: action.to_string(),
        target: target.to_string(),
        date: date.to_string(),
    })
    .collect()
}
