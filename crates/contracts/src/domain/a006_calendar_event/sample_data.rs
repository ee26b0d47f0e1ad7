use super::aggregate::{CalendarEvent, CalendarEventId, EventType};
use crate::shared::metric_value::MetricValue;

fn event(
    id: u32,
    title: &str,
    time: &str,
    duration: &str,
    attendees: u32,
    event_type: EventType,
    accent: &str,
) -> CalendarEvent {
    CalendarEvent {
        id: CalendarEventId(id),
        title: title.to_string(),
        time: time.to_string(),
        duration: MetricValue::parse_lenient(duration),
        attendees,
        event_type,
        accent: accent.to_string(),
    }
}

pub fn events() -> Vec<CalendarEvent> {
    vec![
        event(1, "Team Standup", "09:00 AM", "30min", 8, EventType::Meeting, "purple"),
        event(2, "Product Review", "11:00 AM", "1h", 12, EventType::Review, "blue"),
        event(3, "Interview: Senior Dev", "02:00 PM", "45min", 3, EventType::Interview, "pink"),
    ]
}
