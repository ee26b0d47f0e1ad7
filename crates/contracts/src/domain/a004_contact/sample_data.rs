use super::aggregate::{Contact, ContactId};
use crate::domain::a001_team_member::Presence;

#[allow(clippy::too_many_arguments)]
fn contact(
    id: u32,
    name: &str,
    seed: &str,
    role: &str,
    presence: Presence,
    last_message: &str,
    time: &str,
    unread: u32,
) -> Contact {
    Contact {
        id: ContactId(id),
        name: name.to_string(),
        avatar: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={}", seed),
        role: role.to_string(),
        presence,
        last_message: last_message.to_string(),
        time: time.to_string(),
        unread,
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact(
            1,
            "Sarah Anderson",
            "Sarah",
            "UI/UX Designer",
            Presence::Online,
            "The new dashboard looks great!",
            "2m ago",
            3,
        ),
        contact(
            2,
            "John Mitchell",
            "John",
            "Frontend Developer",
            Presence::Offline,
            "I'll check the PR tomorrow",
            "1h ago",
            0,
        ),
        contact(
            3,
            "Emily Chen",
            "Emily",
            "Product Manager",
            Presence::Online,
            "Meeting at 3 PM?",
            "30m ago",
            1,
        ),
    ]
}
