use crate::domain::a004_contact::ContactId;
use crate::domain::common::Record;
use serde::{Deserialize, Serialize};

crate::record_id!(MessageId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    Me,
    Contact(ContactId),
}

impl Sender {
    pub fn is_me(&self) -> bool {
        matches!(self, Sender::Me)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub time: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

impl Record for Message {
    type Id = MessageId;

    fn id(&self) -> MessageId {
        self.id
    }

    fn category(&self) -> &str {
        match self.sender {
            Sender::Me => "me",
            Sender::Contact(_) => "contact",
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.text.as_str()]
    }
}

/// Page-local chat transcript. Lives only while the Messages page is mounted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    fn next_id(&self) -> MessageId {
        MessageId(self.messages.iter().map(|m| m.id.0).max().unwrap_or(0) + 1)
    }

    /// Appends an outgoing message; blank text is ignored.
    pub fn push_outgoing(&mut self, text: &str, time: &str) -> Option<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.messages.push(Message {
            id,
            sender: Sender::Me,
            text: text.to_string(),
            time: time.to_string(),
            attachments: Vec::new(),
        });
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_message::sample_data::messages;
    use crate::shared::filter::{filter_records, FilterCriterion};

    #[test]
    fn test_push_outgoing() {
        let mut conversation = Conversation::new(messages());
        assert_eq!(conversation.push_outgoing("  ", "10:40 AM"), None);
        assert_eq!(conversation.messages.len(), 3);

        let id = conversation.push_outgoing(" Looks good! ", "10:40 AM");
        assert_eq!(id, Some(MessageId(4)));
        let last = conversation.messages.last().unwrap();
        assert_eq!(last.text, "Looks good!");
        assert!(last.sender.is_me());
    }

    #[test]
    fn test_push_into_empty() {
        let mut conversation = Conversation::default();
        assert!(conversation.messages.is_empty());
        assert_eq!(conversation.push_outgoing("hi", "now"), Some(MessageId(1)));
    }

    #[test]
    fn test_filter_by_sender() {
        let mine = filter_records(&messages(), &FilterCriterion::new("me", ""));
        assert_eq!(mine.len(), 1);
        let theirs = filter_records(&messages(), &FilterCriterion::new("contact", "mockups"));
        assert_eq!(theirs.len(), 1);
    }
}
