pub mod header;
pub mod left;

use crate::shared::view_state::use_view_state;
use leptos::prelude::*;

/// Page chrome: sidebar on the left, top bar with breadcrumbs, content.
///
/// ```text
/// +---------+--------------------------------+
/// |         |  Header (breadcrumbs, actions) |
/// | Sidebar +--------------------------------+
/// |         |  Content                       |
/// +---------+--------------------------------+
/// ```
///
/// Sidebar visibility belongs to the page's view state, so it resets to
/// open whenever a new page mounts.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let store = use_view_state();

    view! {
        <div class="app-layout">
            <left::Left>
                <left::Sidebar />
            </left::Left>
            <div class="app-body" class:app-body--shifted=move || store.sidebar_open()>
                <header::Header />
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
