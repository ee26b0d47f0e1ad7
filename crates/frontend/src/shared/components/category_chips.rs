use crate::shared::view_state::use_view_state;
use contracts::domain::common::CategoryChip;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

/// Category filter buttons bound to the page's `selected_category`.
#[component]
pub fn CategoryChips(chips: Vec<CategoryChip>) -> impl IntoView {
    let store = use_view_state();

    view! {
        <div class="chips">
            {chips
                .into_iter()
                .map(|chip| {
                    let id = StoredValue::new(chip.id.clone());
                    view! {
                        <button
                            class="chip"
                            class:chip--active=move || store.selected_category() == id.get_value()
                            on:click=move |_| store.dispatch(ViewAction::SetCategory(id.get_value()))
                        >
                            <span>{chip.name.clone()}</span>
                            <span class="chip__count">{chip.count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
