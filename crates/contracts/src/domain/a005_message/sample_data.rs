use super::aggregate::{Message, MessageId, Sender};
use crate::domain::a004_contact::ContactId;
use crate::domain::common::record::owned;

fn message(id: u32, sender: Sender, text: &str, time: &str, attachments: &[&str]) -> Message {
    Message {
        id: MessageId(id),
        sender,
        text: text.to_string(),
        time: time.to_string(),
        attachments: owned(attachments),
    }
}

/// Opening transcript shown for the selected conversation.
pub fn messages() -> Vec<Message> {
    vec![
        message(
            1,
            Sender::Contact(ContactId(1)),
            "Hi! I've finished the UI mockups for the analytics dashboard.",
            "10:30 AM",
            &["dashboard-mock.png"],
        ),
        message(
            2,
            Sender::Me,
            "That's great! Can you walk me through the main features?",
            "10:32 AM",
            &[],
        ),
        message(
            3,
            Sender::Contact(ContactId(1)),
            "Sure! I've focused on making the data visualization more intuitive and added some new interactive elements.",
            "10:35 AM",
            &[],
        ),
    ]
}
