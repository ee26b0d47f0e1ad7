use crate::routes::routes::AppRoutes;
use crate::shared::config::DashboardConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::load();
    log::debug!("dashboard config: {:?}", config);
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
