//! Route table, page ids and breadcrumbs.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const ROOT_PATH: &str = "/";
pub const HOME_PATH: &str = "/hr";

/// Breadcrumb used for `/hr` and for every path outside the table.
pub const DEFAULT_BREADCRUMB: Breadcrumb = Breadcrumb {
    primary: "Dashboard",
    secondary: "Overview",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    #[default]
    Dashboard,
    Analytics,
    Calendar,
    Reports,
    Tasks,
    Team,
    Projects,
    Messages,
    Profile,
}

impl PageId {
    pub const ALL: [PageId; 9] = [
        PageId::Dashboard,
        PageId::Analytics,
        PageId::Calendar,
        PageId::Reports,
        PageId::Tasks,
        PageId::Team,
        PageId::Projects,
        PageId::Messages,
        PageId::Profile,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Analytics => "analytics",
            PageId::Calendar => "calendar",
            PageId::Reports => "reports",
            PageId::Tasks => "tasks",
            PageId::Team => "team",
            PageId::Projects => "projects",
            PageId::Messages => "messages",
            PageId::Profile => "profile",
        }
    }

    pub fn from_id(id: &str) -> Option<PageId> {
        PageId::ALL.into_iter().find(|page| page.id() == id)
    }

    pub fn path(&self) -> &'static str {
        match self {
            PageId::Dashboard => HOME_PATH,
            PageId::Analytics => "/hr/analytics",
            PageId::Calendar => "/hr/calendar",
            PageId::Reports => "/hr/reports",
            PageId::Tasks => "/hr/tasks",
            PageId::Team => "/hr/team",
            PageId::Projects => "/hr/projects",
            PageId::Messages => "/hr/messages",
            PageId::Profile => "/hr/profile",
        }
    }

    /// Label of the sidebar entry.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::Analytics => "Analytics",
            PageId::Calendar => "Calendar",
            PageId::Reports => "Reports",
            PageId::Tasks => "Tasks",
            PageId::Team => "Team Members",
            PageId::Projects => "Projects",
            PageId::Messages => "Messages",
            PageId::Profile => "Profile",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PageId::Dashboard => "home",
            PageId::Analytics => "activity",
            PageId::Calendar => "calendar",
            PageId::Reports => "bar-chart",
            PageId::Tasks => "check-circle",
            PageId::Team => "users",
            PageId::Projects => "layers",
            PageId::Messages => "message-square",
            PageId::Profile => "user",
        }
    }

    pub fn breadcrumb(&self) -> Breadcrumb {
        match self {
            PageId::Dashboard => DEFAULT_BREADCRUMB,
            PageId::Team => Breadcrumb::new("Dashboard", "Team"),
            other => Breadcrumb::new("Dashboard", other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl Breadcrumb {
    pub const fn new(primary: &'static str, secondary: &'static str) -> Self {
        Self { primary, secondary }
    }

    pub fn pair(&self) -> (&'static str, &'static str) {
        (self.primary, self.secondary)
    }
}

/// Result of resolving a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub page: PageId,
    pub breadcrumb: Breadcrumb,
    /// Set when the path is replaced in history (root → `/hr`).
    pub redirected_to: Option<&'static str>,
    pub known: bool,
}

static ROUTES: Lazy<HashMap<&'static str, PageId>> =
    Lazy::new(|| PageId::ALL.into_iter().map(|page| (page.path(), page)).collect());

/// Exact-match lookup; unknown paths fall back to the dashboard.
pub fn resolve(path: &str) -> Resolution {
    if path == ROOT_PATH {
        return Resolution {
            page: PageId::Dashboard,
            breadcrumb: PageId::Dashboard.breadcrumb(),
            redirected_to: Some(HOME_PATH),
            known: true,
        };
    }

    match ROUTES.get(path) {
        Some(page) => Resolution {
            page: *page,
            breadcrumb: page.breadcrumb(),
            redirected_to: None,
            known: true,
        },
        None => Resolution {
            page: PageId::Dashboard,
            breadcrumb: DEFAULT_BREADCRUMB,
            redirected_to: None,
            known: false,
        },
    }
}

pub fn breadcrumb_for(path: &str) -> Breadcrumb {
    resolve(path).breadcrumb
}

/// Sidebar section: title plus ordered pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub pages: Vec<PageId>,
}

pub fn nav_sections() -> Vec<NavSection> {
    vec![
        NavSection {
            title: "Main Menu",
            pages: vec![
                PageId::Dashboard,
                PageId::Analytics,
                PageId::Projects,
                PageId::Calendar,
            ],
        },
        NavSection {
            title: "Resources",
            pages: vec![
                PageId::Team,
                PageId::Tasks,
                PageId::Reports,
                PageId::Messages,
                PageId::Profile,
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_path() {
        let r = resolve("/hr/analytics");
        assert_eq!(r.page, PageId::Analytics);
        assert_eq!(r.breadcrumb.pair(), ("Dashboard", "Analytics"));
        assert!(r.known);
        assert_eq!(r.redirected_to, None);
    }

    #[test]
    fn test_resolve_unknown_path() {
        let r = resolve("/unknown");
        assert_eq!(r.page, PageId::Dashboard);
        assert_eq!(r.breadcrumb.pair(), ("Dashboard", "Overview"));
        assert!(!r.known);
    }

    #[test]
    fn test_root_matches_home() {
        let root = resolve("/");
        let home = resolve("/hr");
        assert_eq!(root.page, home.page);
        assert_eq!(root.breadcrumb, home.breadcrumb);
        assert_eq!(root.redirected_to, Some("/hr"));
        assert_eq!(home.redirected_to, None);
    }

    #[test]
    fn test_exact_match_only() {
        assert!(!resolve("/hr/").known);
        assert!(!resolve("/HR").known);
        assert!(!resolve("/hr/analytics?x=1").known);
    }

    #[test]
    fn test_every_page_round_trips() {
        for page in PageId::ALL {
            assert_eq!(resolve(page.path()).page, page);
            assert_eq!(PageId::from_id(page.id()), Some(page));
        }
        assert_eq!(PageId::from_id("nope"), None);
    }

    #[test]
    fn test_breadcrumbs() {
        assert_eq!(breadcrumb_for("/hr").pair(), ("Dashboard", "Overview"));
        assert_eq!(breadcrumb_for("/hr/team").pair(), ("Dashboard", "Team"));
        assert_eq!(breadcrumb_for("/hr/tasks").pair(), ("Dashboard", "Tasks"));
    }

    #[test]
    fn test_nav_sections_cover_every_page_once() {
        let mut pages: Vec<PageId> = nav_sections().into_iter().flat_map(|s| s.pages).collect();
        assert_eq!(pages.len(), PageId::ALL.len());
        pages.sort_by_key(|p| p.id());
        pages.dedup();
        assert_eq!(pages.len(), PageId::ALL.len());
    }
}
