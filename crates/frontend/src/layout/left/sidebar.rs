//! Sidebar: brand, quick search over menu entries, and the two nav sections.

use crate::shared::icons::icon;
use crate::shared::view_state::use_view_state;
use contracts::shared::filter::FilterCriterion;
use contracts::shared::navigation::{nav_sections, PageId};
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Pages of a section whose label matches `query`.
fn visible_pages(pages: &[PageId], query: &str) -> Vec<PageId> {
    let criterion = FilterCriterion::all().with_query(query);
    pages
        .iter()
        .copied()
        .filter(|page| criterion.matches_text(&[page.label()]))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_view_state();
    let navigate = StoredValue::new_local(use_navigate());
    let (quick_search, set_quick_search) = signal(String::new());

    let go_to = move |page: PageId| {
        log::info!("navigate: {} -> {}", store.state.get_untracked().active_tab.id(), page.id());
        store.dispatch(ViewAction::SetActiveTab(page));
        navigate.with_value(|nav| nav(page.path(), NavigateOptions::default()));
    };

    let sections = nav_sections()
        .into_iter()
        .map(|section| {
            let pages = StoredValue::new(section.pages);
            view! {
                <div class="app-sidebar__section">
                    <h2 class="app-sidebar__section-title">{section.title}</h2>
                    {move || {
                        visible_pages(&pages.get_value(), &quick_search.get())
                            .into_iter()
                            .map(|page| view! {
                                <button
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=move || store.state.with(|s| s.active_tab == page)
                                    on:click=move |_| go_to(page)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(page.icon())}
                                        <span>{page.label()}</span>
                                    </div>
                                </button>
                            })
                            .collect_view()
                    }}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("layers")}</div>
                <h1 class="app-sidebar__title">"HR Vision"</h1>
                <button
                    class="app-sidebar__close"
                    title="Close sidebar"
                    on:click=move |_| store.dispatch(ViewAction::SetSidebarOpen(false))
                >
                    {icon("x")}
                </button>
            </div>
            <div class="app-sidebar__search">
                {icon("search")}
                <input
                    type="text"
                    placeholder="Quick search..."
                    prop:value=move || quick_search.get()
                    on:input=move |ev| set_quick_search.set(event_target_value(&ev))
                />
            </div>
            {sections}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_search_filters_labels() {
        let pages = [PageId::Team, PageId::Tasks, PageId::Reports];
        assert_eq!(visible_pages(&pages, ""), pages.to_vec());
        assert_eq!(visible_pages(&pages, "TEAM"), vec![PageId::Team]);
        assert_eq!(visible_pages(&pages, " ta"), vec![PageId::Tasks]);
        assert!(visible_pages(&pages, "zzz").is_empty());
    }
}
