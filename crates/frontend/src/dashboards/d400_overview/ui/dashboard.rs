use crate::layout::Shell;
use crate::shared::charts::{DonutChart, LineChart};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::view_state::ViewStateStore;
use contracts::dashboards::d400_overview::{
    project_timeline, recent_activities, team_performance, QUICK_ACTIONS,
};
use contracts::shared::indicators::overview_cards;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    ViewStateStore::provide(PageId::Dashboard);

    let activities = recent_activities()
        .into_iter()
        .map(|item| {
            let spec = AnimationSpec::gentle().with_delay(item.order * 200);
            view! {
                <div class="activity-item" style=spec.css_animation("slide-in-left")>
                    <div class="activity-item__icon">{icon("check-circle")}</div>
                    <div>
                        <p class="activity-item__title">{item.title}</p>
                        <p class="activity-item__when">{item.when}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    let quick_actions = QUICK_ACTIONS
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let spec = AnimationSpec::gentle().with_delay(i as u32 * 200);
            view! {
                <button class="quick-action" style=spec.css_animation("rise-in")>{*action}</button>
            }
        })
        .collect_view();

    view! {
        <Shell>
            <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
                <MetricGrid cards=overview_cards() />

                <div class="page__grid page__grid--2">
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(200)>
                        <h2 class="card__title">"Project Timeline"</h2>
                        <LineChart data=project_timeline() />
                    </CardAnimated>
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(300)>
                        <h2 class="card__title">"Team Distribution"</h2>
                        <DonutChart slices=team_performance() />
                    </CardAnimated>
                </div>

                <CardAnimated spec=AnimationSpec::gentle().with_delay(400)>
                    <h2 class="card__title">"Recent Activities"</h2>
                    <div class="activity-list">{activities}</div>
                </CardAnimated>

                <div class="page__grid page__grid--3">{quick_actions}</div>
            </PageFrame>
        </Shell>
    }
}
