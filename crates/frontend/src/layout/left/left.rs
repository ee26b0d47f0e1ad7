use crate::shared::view_state::use_view_state;
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let store = use_view_state();
    let is_open = move || store.sidebar_open();

    view! {
        // Overlay closes the sidebar on narrow screens.
        <Show when=is_open>
            <div
                class="left__overlay"
                on:click=move |_| store.dispatch(ViewAction::SetSidebarOpen(false))
            ></div>
        </Show>
        <aside data-zone="left" class="left" class:hidden=move || !is_open()>
            {children()}
        </aside>
    }
}
