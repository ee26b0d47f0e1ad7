use crate::layout::Shell;
use crate::shared::charts::{DonutChart, LineChart, RadarChart};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::view_state::ViewStateStore;
use contracts::dashboards::d402_reports::{
    department_metrics, performance_trends, retention, skills_radar,
};
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use contracts::shared::view_state::{ReportPeriod, ViewAction};
use leptos::prelude::*;

#[component]
pub fn ReportsDashboard() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Reports);

    let periods = ReportPeriod::ALL
        .into_iter()
        .map(|period| {
            view! {
                <button
                    class="chip"
                    class:chip--active=move || store.state.with(|s| s.period == period)
                    on:click=move |_| store.dispatch(ViewAction::SetPeriod(period))
                >
                    {period.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <Shell>
            <PageFrame page_id="d402_reports--dashboard" category=PAGE_CAT_DASHBOARD>
                <PageHeader
                    title="HR Analytics Reports"
                    subtitle="Comprehensive insights and performance metrics".to_string()
                >
                    <button class="button button--ghost" title="Filter">{icon("filter")}</button>
                    <button class="button button--ghost" title="Refresh">{icon("refresh")}</button>
                    <button class="button button--primary">
                        {icon("download")}
                        <span>"Export"</span>
                    </button>
                </PageHeader>

                <div class="chips">{periods}</div>

                <div class="page__grid page__grid--2">
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(200)>
                        <h2 class="card__title">"Performance Trends"</h2>
                        <LineChart data=performance_trends() />
                    </CardAnimated>
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(300)>
                        <h2 class="card__title">"Department Distribution"</h2>
                        <DonutChart slices=department_metrics() />
                    </CardAnimated>
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(400)>
                        <h2 class="card__title">"Skills Assessment"</h2>
                        <RadarChart data=skills_radar() />
                    </CardAnimated>
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(500)>
                        <h2 class="card__title">"Retention Analysis"</h2>
                        <LineChart data=retention() area=true />
                    </CardAnimated>
                </div>
            </PageFrame>
        </Shell>
    }
}
