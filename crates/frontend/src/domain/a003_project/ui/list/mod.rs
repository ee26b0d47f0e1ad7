use crate::layout::Shell;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::category_chips::CategoryChips;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::view_state::{use_view_state, ViewStateStore};
use contracts::domain::a003_project::sample_data::projects;
use contracts::domain::a003_project::{project_categories, Project};
use contracts::domain::common::Record;
use contracts::shared::filter::filter_records;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let store = use_view_state();
    let key = StoredValue::new(project.key());
    let spec = AnimationSpec::gentle().with_delay(index as u32 * 100);
    let current = project.current_milestone();

    let milestones = project
        .milestones
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let state = match current {
                Some(c) if i < c => "milestone milestone--done",
                Some(c) if i == c => "milestone milestone--current",
                None => "milestone milestone--done",
                _ => "milestone",
            };
            view! { <li class=state>{m.clone()}</li> }
        })
        .collect_view();
    let stack = project
        .tech_stack
        .iter()
        .map(|t| view! { <span class="tag">{t.clone()}</span> })
        .collect_view();

    view! {
        <CardAnimated spec=spec class=format!("project-card project-card--{}", project.accent)>
            <div
                class="project-card__head"
                class:project-card__head--selected=move || key.with_value(|k| store.is_selected(k))
                on:click=move |_| store.dispatch(ViewAction::Select(key.get_value()))
            >
                <h3 class="project-card__title">{project.title.clone()}</h3>
                <span class="badge">{project.category.label()}</span>
                <span class="muted">{format!("{} priority", project.priority)}</span>
            </div>
            <p class="project-card__description">{project.description.clone()}</p>
            <div class="progress">
                <div class="progress__bar" style=format!("width: {}%", project.completion.min(100))></div>
            </div>
            <div class="project-card__stats">
                <div><p class="muted">"Completion"</p><p>{format!("{}%", project.completion)}</p></div>
                <div><p class="muted">"Team"</p><p>{format!("{} members", project.team)}</p></div>
                <div><p class="muted">"Budget"</p><p>{project.budget.to_string()}</p></div>
                <div><p class="muted">"ROI"</p><p>{project.roi.to_string()}</p></div>
            </div>
            <div class="project-card__deadline">
                {icon("calendar")}
                <span>{project.deadline.format("%b %d, %Y").to_string()}</span>
            </div>
            <ul class="milestones">{milestones}</ul>
            <div class="tags">{stack}</div>
        </CardAnimated>
    }
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Projects);
    let all = StoredValue::new(projects());
    let chips = all.with_value(|p| project_categories(p));

    let visible = Memo::new(move |_| {
        let criterion = store.criterion();
        all.with_value(|p| filter_records(p, &criterion))
    });

    view! {
        <Shell>
            <PageFrame page_id="a003_project--list" category=PAGE_CAT_LIST>
                <PageHeader title="Projects" subtitle="Track progress, budgets and milestones".to_string()>
                    <button class="button button--primary">
                        {icon("plus")}
                        <span>"New Project"</span>
                    </button>
                </PageHeader>

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || store.search_text())
                        on_change=Callback::new(move |text: String| store.dispatch(ViewAction::SetSearchText(text)))
                        placeholder="Search projects..."
                    />
                    <CategoryChips chips=chips />
                </div>

                <div class="page__content card-grid">
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, project)| project.key()
                        children=move |(index, project)| view! { <ProjectCard project=project index=index /> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty-state">"No projects match your filters."</p>
                </Show>
            </PageFrame>
        </Shell>
    }
}
