use crate::dashboards::{AnalyticsDashboard, OverviewDashboard, ReportsDashboard};
use crate::domain::a001_team_member::ui::list::TeamList;
use crate::domain::a002_task::ui::list::TaskList;
use crate::domain::a003_project::ui::list::ProjectList;
use crate::domain::a005_message::ui::chat::MessagesPage;
use crate::domain::a006_calendar_event::ui::calendar::CalendarPage;
use crate::domain::a007_user_profile::ui::details::ProfilePage;
use contracts::shared::navigation::{resolve, HOME_PATH};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::{path, NavigateOptions};

/// Unknown paths render the overview; the breadcrumb falls back with it.
#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    if !resolve(&path).known {
        log::info!("unknown route '{}', showing dashboard", path);
    }
    view! { <OverviewDashboard /> }
}

#[component]
fn RootRedirect() -> impl IntoView {
    log::info!("redirect / -> {}", HOME_PATH);
    view! {
        <Redirect
            path=HOME_PATH
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=RootRedirect />
                <Route path=path!("/hr") view=OverviewDashboard />
                <Route path=path!("/hr/analytics") view=AnalyticsDashboard />
                <Route path=path!("/hr/calendar") view=CalendarPage />
                <Route path=path!("/hr/reports") view=ReportsDashboard />
                <Route path=path!("/hr/tasks") view=TaskList />
                <Route path=path!("/hr/team") view=TeamList />
                <Route path=path!("/hr/projects") view=ProjectList />
                <Route path=path!("/hr/messages") view=MessagesPage />
                <Route path=path!("/hr/profile") view=ProfilePage />
            </Routes>
        </Router>
    }
}
