use crate::domain::common::{CategoryChip, Record};
use crate::shared::metric_value::MetricValue;
use serde::{Deserialize, Serialize};

crate::record_id!(CalendarEventId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Meeting,
    Review,
    Interview,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Meeting, EventType::Review, EventType::Interview];

    pub fn id(&self) -> &'static str {
        match self {
            EventType::Meeting => "meeting",
            EventType::Review => "review",
            EventType::Interview => "interview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meetings",
            EventType::Review => "Reviews",
            EventType::Interview => "Interviews",
        }
    }
}

/// Scheduled item shown in the "Today's Events" column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: CalendarEventId,
    pub title: String,
    pub time: String,
    /// Always a `MetricValue::Duration`.
    pub duration: MetricValue,
    pub attendees: u32,
    pub event_type: EventType,
    pub accent: String,
}

impl CalendarEvent {
    pub fn attendees_label(&self) -> String {
        format!("{} attendees", self.attendees)
    }
}

impl Record for CalendarEvent {
    type Id = CalendarEventId;

    fn id(&self) -> CalendarEventId {
        self.id
    }

    fn category(&self) -> &str {
        self.event_type.id()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

pub fn event_types(events: &[CalendarEvent]) -> Vec<CategoryChip> {
    let pairs: Vec<(&str, &str)> = EventType::ALL.iter().map(|t| (t.id(), t.label())).collect();
    crate::shared::filter::category_chips(events, "All Events", &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_calendar_event::sample_data::events;
    use crate::shared::filter::{filter_records, FilterCriterion};
    use crate::shared::metric_value::DurationUnit;

    #[test]
    fn test_durations_parse() {
        let events = events();
        assert_eq!(
            events[0].duration,
            MetricValue::Duration {
                amount: 30.0,
                unit: DurationUnit::Minutes
            }
        );
        let shown: Vec<String> = events.iter().map(|e| e.duration.to_string()).collect();
        assert_eq!(shown, vec!["30min", "1h", "45min"]);
    }

    #[test]
    fn test_filter_interviews() {
        let found = filter_records(&events(), &FilterCriterion::new("interview", "senior"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attendees_label(), "3 attendees");
    }

    #[test]
    fn test_event_type_chips() {
        let chips = event_types(&events());
        assert_eq!(chips[0].count, 3);
        assert!(chips.iter().skip(1).all(|c| c.count == 1));
    }
}
