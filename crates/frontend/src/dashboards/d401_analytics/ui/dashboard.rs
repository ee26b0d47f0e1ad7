use crate::layout::Shell;
use crate::shared::charts::{BarChart, LineChart, RadarChart};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::components::page_header::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::view_state::ViewStateStore;
use contracts::dashboards::d401_analytics::{
    department_performance, employee_growth, salary_distribution,
};
use contracts::shared::indicators::analytics_cards;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use leptos::prelude::*;

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    ViewStateStore::provide(PageId::Analytics);

    view! {
        <Shell>
            <PageFrame page_id="d401_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
                <PageHeader title="Analytics" subtitle="Workforce trends and hiring metrics".to_string() />
                <MetricGrid cards=analytics_cards() />

                <CardAnimated spec=AnimationSpec::molasses()>
                    <h2 class="card__title">"Employee Growth Trends"</h2>
                    <LineChart data=employee_growth() area=true />
                </CardAnimated>

                <div class="page__grid page__grid--2">
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(200)>
                        <h2 class="card__title">"Department Performance"</h2>
                        <RadarChart data=department_performance() />
                    </CardAnimated>
                    <CardAnimated spec=AnimationSpec::gentle().with_delay(400)>
                        <h2 class="card__title">"Salary Distribution"</h2>
                        <BarChart data=salary_distribution() />
                    </CardAnimated>
                </div>
            </PageFrame>
        </Shell>
    }
}
