use super::stat_card::StatCard;
use contracts::shared::indicators::MetricCard;
use leptos::prelude::*;

/// Row of stat cards; column count follows the number of cards.
#[component]
pub fn MetricGrid(cards: Vec<MetricCard>) -> impl IntoView {
    let cols_class = match cards.len() {
        2 => "metric-grid metric-grid--cols-2",
        3 => "metric-grid metric-grid--cols-3",
        _ => "metric-grid metric-grid--cols-4",
    };

    view! {
        <div class=cols_class>
            {cards
                .into_iter()
                .enumerate()
                .map(|(i, card)| view! { <StatCard card=card index=i as u32 /> })
                .collect_view()}
        </div>
    }
}
