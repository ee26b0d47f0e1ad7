use crate::layout::Shell;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::category_chips::CategoryChips;
use crate::shared::components::metric_grid::MetricGrid;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::view_state::ViewStateStore;
use chrono::Local;
use contracts::domain::a002_task::sample_data::tasks;
use contracts::domain::a002_task::{task_statuses, Task};
use contracts::domain::common::Record;
use contracts::shared::filter::filter_records;
use contracts::shared::indicators::task_cards;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
fn TaskRow(task: Task, index: usize) -> impl IntoView {
    let today = Local::now().date_naive();
    let overdue = task.is_overdue(today);
    let due = task.due_label();
    let spec = AnimationSpec::gentle().with_delay(index as u32 * 100);
    let tags = task
        .tags
        .iter()
        .map(|t| view! { <span class="tag">{t.clone()}</span> })
        .collect_view();

    view! {
        <CardAnimated spec=spec class="task-row">
            <div class="task-row__head">
                <h3 class="task-row__title">{task.title.clone()}</h3>
                <span class=task.status.badge_class()>{task.status.label()}</span>
                <span class=task.priority.css_class()>{task.priority.id()}</span>
            </div>
            <p class="task-row__description">{task.description.clone()}</p>
            <div class="task-row__meta">
                <div class="task-row__assignee">
                    <img class="avatar avatar--sm" src=task.assignee.avatar.clone() alt=task.assignee.name.clone() />
                    <span>{task.assignee.name.clone()}</span>
                </div>
                <div class="task-row__due" class:task-row__due--overdue=overdue>
                    {icon("calendar")}
                    <span>{due}</span>
                </div>
                <div class="tags">{tags}</div>
            </div>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {}%", task.progress.min(100))></div>
            </div>
            <span class="muted">{format!("{}% complete", task.progress)}</span>
        </CardAnimated>
    }
}

#[component]
pub fn TaskList() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Tasks);
    let all = StoredValue::new(tasks());
    let chips = all.with_value(|t| task_statuses(t));

    let visible = Memo::new(move |_| {
        let criterion = store.criterion();
        all.with_value(|t| filter_records(t, &criterion))
    });

    view! {
        <Shell>
            <PageFrame page_id="a002_task--list" category=PAGE_CAT_LIST>
                <PageHeader title="Tasks" subtitle="Manage and track team tasks".to_string()>
                    <button class="button button--primary">
                        {icon("plus")}
                        <span>"New Task"</span>
                    </button>
                </PageHeader>

                <MetricGrid cards=task_cards() />

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || store.search_text())
                        on_change=Callback::new(move |text: String| store.dispatch(ViewAction::SetSearchText(text)))
                        placeholder="Search tasks..."
                    />
                    <CategoryChips chips=chips />
                </div>

                <div class="page__content task-list">
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, task)| task.key()
                        children=move |(index, task)| view! { <TaskRow task=task index=index /> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty-state">"No tasks match your filters."</p>
                </Show>
            </PageFrame>
        </Shell>
    }
}
