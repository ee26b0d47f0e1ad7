use crate::domain::a001_team_member::Presence;
use crate::domain::common::Record;
use serde::{Deserialize, Serialize};

crate::record_id!(ContactId);

/// Chat contact in the conversations list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub avatar: String,
    pub role: String,
    pub presence: Presence,
    #[serde(rename = "lastMessage")]
    pub last_message: String,
    pub time: String,
    pub unread: u32,
}

impl Contact {
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}

impl Record for Contact {
    type Id = ContactId;

    fn id(&self) -> ContactId {
        self.id
    }

    fn category(&self) -> &str {
        self.presence.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.last_message.as_str(),
        ]
    }
}

pub fn total_unread(contacts: &[Contact]) -> u32 {
    contacts.iter().map(|c| c.unread).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_contact::sample_data::contacts;
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_search_contacts() {
        let found = filter_records(&contacts(), &FilterCriterion::all().with_query("pr"));
        let names: Vec<&str> = found.iter().map(|c| c.name.as_str()).collect();
        // "PR" in John's last message, "Product" in Emily's role
        assert_eq!(names, vec!["John Mitchell", "Emily Chen"]);
    }

    #[test]
    fn test_online_filter() {
        let online = filter_records(&contacts(), &FilterCriterion::new("online", ""));
        assert_eq!(online.len(), 2);
    }

    #[test]
    fn test_unread() {
        assert_eq!(total_unread(&contacts()), 4);
        assert!(!contacts()[1].has_unread());
    }
}
