use crate::shared::animation::use_projected_value;
use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use contracts::shared::indicators::{MetricCard, Trend};
use contracts::shared::projector::Projection;
use leptos::prelude::*;

/// Headline metric with an animated counter and a change badge.
#[component]
pub fn StatCard(
    card: MetricCard,
    /// Position in the grid; drives the stagger delay.
    #[prop(optional)]
    index: u32,
) -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let spec = config.counter_spec().with_delay(index * 100);
    let shown = use_projected_value(Projection::new(card.value, spec));

    let trend = card.trend();
    let change_text = card.change.format_signed();
    let arrow = match trend {
        Trend::Up => "\u{2191}",
        Trend::Down => "\u{2193}",
        Trend::Flat => "",
    };

    let description = card.description.clone().map(|d| {
        view! { <div class="stat-card__subtitle">{d}</div> }
    });

    view! {
        <div class=format!("stat-card stat-card--{}", card.accent)>
            <div class="stat-card__icon">
                {icon(&card.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{card.title.clone()}</div>
                <div class="stat-card__value">
                    {move || shown.get().to_string()}
                    <span class=format!("stat-card__change {}", trend.css_modifier())>
                        {format!("{}{}", arrow, change_text)}
                    </span>
                </div>
                {description}
            </div>
        </div>
    }
}
