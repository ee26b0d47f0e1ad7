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
use contracts::domain::a001_team_member::sample_data::team_members;
use contracts::domain::a001_team_member::{departments, TeamMember};
use contracts::domain::common::Record;
use contracts::shared::filter::filter_records;
use contracts::shared::indicators::team_cards;
use contracts::shared::navigation::PageId;
use contracts::shared::projector::AnimationSpec;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
fn MemberCard(member: TeamMember, store: ViewStateStore, index: usize) -> impl IntoView {
    let key = StoredValue::new(member.key());
    let spec = AnimationSpec::wobbly().with_delay(index as u32 * 100);

    let toggle = move |_| {
        let key = key.get_value();
        let action = if store.is_selected(&key) {
            ViewAction::ClearSelection
        } else {
            ViewAction::Select(key)
        };
        store.dispatch(action);
    };

    let initials = member.initials();
    let presence_class = format!("presence presence--{}", member.presence.id());
    let skills = member
        .skills
        .iter()
        .map(|s| view! { <span class="tag">{s.clone()}</span> })
        .collect_view();
    let TeamMember {
        name,
        role,
        avatar,
        performance,
        tasks,
        availability,
        recent_activity,
        email,
        location,
        projects,
        ..
    } = member;
    let projects = projects.join(", ");

    view! {
        <CardAnimated spec=spec class="member-card">
            <div class="member-card__head" on:click=toggle>
                <div class="avatar">
                    <img src=avatar alt=initials />
                    <span class=presence_class></span>
                </div>
                <div>
                    <h3 class="member-card__name">{name}</h3>
                    <p class="member-card__role">{role}</p>
                </div>
            </div>
            <div class="member-card__stats">
                <div><p class="muted">"Performance"</p><p>{format!("{}%", performance)}</p></div>
                <div><p class="muted">"Tasks"</p><p>{tasks}</p></div>
                <div><p class="muted">"Status"</p><p>{availability}</p></div>
            </div>
            <div class="tags">{skills}</div>
            <p class="member-card__activity">{recent_activity}</p>
            <Show when=move || key.with_value(|k| store.is_selected(k))>
                <div class="member-card__details">
                    <p>{icon("mail")}<span>{email.clone()}</span></p>
                    <p>{icon("map-pin")}<span>{location.clone()}</span></p>
                    <p>{icon("layers")}<span>{projects.clone()}</span></p>
                </div>
            </Show>
        </CardAnimated>
    }
}

#[component]
pub fn TeamList() -> impl IntoView {
    let store = ViewStateStore::provide(PageId::Team);
    let members = StoredValue::new(team_members());
    let chips = members.with_value(|m| departments(m));

    let visible = Memo::new(move |_| {
        let criterion = store.criterion();
        members.with_value(|m| filter_records(m, &criterion))
    });

    view! {
        <Shell>
            <PageFrame page_id="a001_team_member--list" category=PAGE_CAT_LIST>
                <PageHeader title="Team Overview" subtitle="Manage and monitor team performance".to_string()>
                    <button class="button button--primary">
                        {icon("plus")}
                        <span>"Add Member"</span>
                    </button>
                </PageHeader>

                <MetricGrid cards=team_cards() />

                <div class="filter-bar">
                    <SearchInput
                        value=Signal::derive(move || store.search_text())
                        on_change=Callback::new(move |text: String| store.dispatch(ViewAction::SetSearchText(text)))
                        placeholder="Search team members..."
                    />
                    <CategoryChips chips=chips />
                </div>

                <div class="page__content card-grid">
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(_, member)| member.key()
                        children=move |(index, member)| view! { <MemberCard member=member store=store index=index /> }
                    />
                </div>
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty-state">"No team members match your filters."</p>
                </Show>
            </PageFrame>
        </Shell>
    }
}
