use crate::shared::icons::icon;
use crate::shared::view_state::use_view_state;
use contracts::domain::a007_user_profile::sample_data::profile;
use contracts::shared::navigation::{breadcrumb_for, PageId};
use contracts::shared::view_state::ViewAction;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

/// Two-letter monogram for the profile chip.
fn monogram(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_view_state();
    let location = use_location();
    let navigate = use_navigate();

    let breadcrumb = Memo::new(move |_| breadcrumb_for(&location.pathname.get()));
    let user = profile();
    let initials = monogram(&user.name);

    view! {
        <nav data-zone="header" class="header">
            <div class="header__content">
                <Show when=move || !store.sidebar_open()>
                    <button
                        class="header__icon-btn"
                        title="Open sidebar"
                        on:click=move |_| store.dispatch(ViewAction::ToggleSidebar)
                    >
                        {icon("menu")}
                    </button>
                </Show>
                <div class="breadcrumb">
                    <span class="breadcrumb__primary">{move || breadcrumb.get().primary}</span>
                    {icon("chevron-right")}
                    <span class="breadcrumb__secondary">{move || breadcrumb.get().secondary}</span>
                </div>
            </div>
            <div class="header__actions">
                <button class="header__icon-btn" title="Quick actions">{icon("edit")}</button>
                <button class="header__icon-btn header__icon-btn--badge" title="Notifications">
                    {icon("bell")}
                </button>
                <button
                    class="header__profile"
                    on:click=move |_| navigate(PageId::Profile.path(), NavigateOptions::default())
                >
                    <span class="header__avatar">{initials}</span>
                    <span class="header__user">
                        <span class="header__user-name">{user.name.clone()}</span>
                        <span class="header__user-role">{user.role.clone()}</span>
                    </span>
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("Alexandra Morrison"), "AM");
        assert_eq!(monogram("cher"), "C");
        assert_eq!(monogram(""), "");
    }
}
