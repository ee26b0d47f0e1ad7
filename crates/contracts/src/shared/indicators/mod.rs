use crate::domain::common::Record;
use crate::shared::metric_value::MetricValue;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Metric card identity & display metadata
// ---------------------------------------------------------------------------

crate::record_id!(
    /// Identifier of a stat card within one page.
    MetricCardId
);

/// Direction of the change badge (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Trend::Up => "stat-card__change--up",
            Trend::Down => "stat-card__change--down",
            Trend::Flat => "stat-card__change--flat",
        }
    }
}

/// One stat card: an animated headline value plus a change badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub id: MetricCardId,
    pub title: String,
    pub value: MetricValue,
    /// Change vs. the previous period, always a percentage.
    pub change: MetricValue,
    pub description: Option<String>,
    pub icon: String,
    /// Gradient accent class suffix, e.g. `blue`.
    pub accent: String,
}

impl MetricCard {
    /// Builds a card from display strings; unknown forms fall back leniently.
    pub fn new(id: u32, title: &str, value: &str, change: &str, icon: &str, accent: &str) -> Self {
        Self {
            id: MetricCardId(id),
            title: title.to_string(),
            value: MetricValue::parse_lenient(value),
            change: MetricValue::parse_lenient(change),
            description: None,
            icon: icon.to_string(),
            accent: accent.to_string(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn trend(&self) -> Trend {
        let change = self.change.magnitude();
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

impl Record for MetricCard {
    type Id = MetricCardId;

    fn id(&self) -> MetricCardId {
        self.id
    }

    fn category(&self) -> &str {
        &self.accent
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str()]
    }
}

// ---------------------------------------------------------------------------
// Static card sets
// ---------------------------------------------------------------------------

pub fn overview_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new(1, "Total Employees", "245", "+12%", "users", "blue"),
        MetricCard::new(2, "Active Projects", "15", "+5%", "building", "purple"),
        MetricCard::new(3, "Tasks Completed", "1234", "+18%", "check-circle", "green"),
        MetricCard::new(4, "Revenue Growth", "$84.5K", "+24%", "trending-up", "orange"),
    ]
}

pub fn analytics_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new(1, "Employee Growth", "+32%", "+32%", "users", "blue")
            .with_description("vs last quarter"),
        MetricCard::new(2, "Avg. Time to Hire", "18 days", "-3%", "clock", "purple")
            .with_description("-3 days from last month"),
        MetricCard::new(3, "Cost per Hire", "$4,200", "-8%", "dollar-sign", "green")
            .with_description("-8% vs industry average"),
        MetricCard::new(4, "ROI", "189%", "+12%", "trending-up", "orange")
            .with_description("+12% this quarter"),
    ]
}

pub fn task_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new(1, "Total Tasks", "124", "+8%", "list-check", "blue"),
        MetricCard::new(2, "In Progress", "45", "+12%", "clock", "purple"),
        MetricCard::new(3, "Completed", "68", "+15%", "check-circle", "green"),
        MetricCard::new(4, "Pending Review", "11", "-2%", "alarm", "orange"),
    ]
}

pub fn team_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new(1, "Total Members", "45", "+5%", "users", "blue"),
        MetricCard::new(2, "Active Projects", "12", "+2%", "rocket", "purple"),
        MetricCard::new(3, "Avg Performance", "94", "+3%", "trending-up", "green"),
        MetricCard::new(4, "Tasks Completed", "284", "+12%", "list-check", "orange"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metric_value::CurrencyUnit;

    #[test]
    fn test_cards_parse_display_values() {
        let cards = overview_cards();
        assert_eq!(cards[0].value, MetricValue::Plain(245.0));
        assert_eq!(
            cards[3].value,
            MetricValue::dollars(84.5, CurrencyUnit::Thousands)
        );
        assert_eq!(cards[3].value.to_string(), "$84.5K");

        let cards = analytics_cards();
        let shown: Vec<String> = cards.iter().map(|c| c.value.to_string()).collect();
        assert_eq!(shown, vec!["32%", "18 days", "$4,200", "189%"]);
    }

    #[test]
    fn test_trend() {
        let cards = task_cards();
        assert_eq!(cards[0].trend(), Trend::Up);
        assert_eq!(cards[3].trend(), Trend::Down);
        assert_eq!(cards[3].change.format_signed(), "-2%");
        let flat = MetricCard::new(9, "Flat", "1", "0%", "x", "blue");
        assert_eq!(flat.trend(), Trend::Flat);
    }

    #[test]
    fn test_ids_are_unique_per_set() {
        for set in [overview_cards(), analytics_cards(), task_cards(), team_cards()] {
            let mut keys: Vec<String> = set.iter().map(|c| c.key()).collect();
            keys.dedup();
            assert_eq!(keys.len(), set.len());
        }
    }
}
