//! Page-scoped view state and its transitions.
//!
//! A `ViewState` is created when a page mounts and dropped when the user
//! navigates away. Every user action maps to exactly one field update.

use super::filter::FilterCriterion;
use super::navigation::PageId;
use crate::domain::common::CATEGORY_ALL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Quarter,
        ReportPeriod::Year,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Quarter => "quarter",
            ReportPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Week => "Week",
            ReportPeriod::Month => "Month",
            ReportPeriod::Quarter => "Quarter",
            ReportPeriod::Year => "Year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub active_tab: PageId,
    pub sidebar_open: bool,
    pub selected_category: String,
    pub search_text: String,
    /// Key of the selected record (see `Record::key`).
    pub selection: Option<String>,
    /// Calendar: months relative to the current one.
    #[serde(default)]
    pub month_offset: i32,
    #[serde(default)]
    pub period: ReportPeriod,
    /// Messages: unsent chat input.
    #[serde(default)]
    pub draft: String,
    #[serde(default)]
    pub event_modal_open: bool,
}

/// One user interaction. Applied in dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    ToggleSidebar,
    SetSidebarOpen(bool),
    SetActiveTab(PageId),
    SetCategory(String),
    SetSearchText(String),
    Select(String),
    ClearSelection,
    ShiftMonth(i32),
    SetPeriod(ReportPeriod),
    SetDraft(String),
    OpenEventModal,
    CloseEventModal,
}

impl ViewState {
    /// Defaults applied on mount of `page`.
    pub fn for_page(page: PageId) -> Self {
        Self {
            active_tab: page,
            sidebar_open: true,
            selected_category: CATEGORY_ALL.to_string(),
            search_text: String::new(),
            selection: None,
            month_offset: 0,
            period: ReportPeriod::default(),
            draft: String::new(),
            event_modal_open: false,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_active_tab(&mut self, page: PageId) {
        self.active_tab = page;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn select(&mut self, key: impl Into<String>) {
        self.selection = Some(key.into());
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selection.as_deref() == Some(key)
    }

    pub fn shift_month(&mut self, delta: i32) {
        self.month_offset = self.month_offset.saturating_add(delta);
    }

    pub fn set_period(&mut self, period: ReportPeriod) {
        self.period = period;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Takes the trimmed draft for sending. Blank drafts are ignored and
    /// left untouched.
    pub fn take_draft(&mut self) -> Option<String> {
        let text = self.draft.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.draft.clear();
        Some(text)
    }

    pub fn open_event_modal(&mut self) {
        self.event_modal_open = true;
    }

    pub fn close_event_modal(&mut self) {
        self.event_modal_open = false;
    }

    /// Criterion for the page's filter engine.
    pub fn criterion(&self) -> FilterCriterion {
        FilterCriterion::new(self.selected_category.clone(), self.search_text.clone())
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::ToggleSidebar => self.toggle_sidebar(),
            ViewAction::SetSidebarOpen(open) => self.set_sidebar_open(open),
            ViewAction::SetActiveTab(page) => self.set_active_tab(page),
            ViewAction::SetCategory(category) => self.set_category(category),
            ViewAction::SetSearchText(text) => self.set_search_text(text),
            ViewAction::Select(key) => self.select(key),
            ViewAction::ClearSelection => self.clear_selection(),
            ViewAction::ShiftMonth(delta) => self.shift_month(delta),
            ViewAction::SetPeriod(period) => self.set_period(period),
            ViewAction::SetDraft(text) => self.set_draft(text),
            ViewAction::OpenEventModal => self.open_event_modal(),
            ViewAction::CloseEventModal => self.close_event_modal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::for_page(PageId::Team);
        assert_eq!(state.active_tab, PageId::Team);
        assert!(state.sidebar_open);
        assert_eq!(state.selected_category, "all");
        assert_eq!(state.search_text, "");
        assert_eq!(state.selection, None);
        assert_eq!(state.month_offset, 0);
        assert_eq!(state.period, ReportPeriod::Month);
        assert!(!state.event_modal_open);
        assert_eq!(state.criterion(), FilterCriterion::all());
    }

    #[test]
    fn test_actions_update_single_field() {
        let initial = ViewState::for_page(PageId::Projects);

        let mut state = initial.clone();
        state.apply(ViewAction::SetCategory("critical".into()));
        assert_eq!(
            state,
            ViewState {
                selected_category: "critical".into(),
                ..initial.clone()
            }
        );

        let mut state = initial.clone();
        state.apply(ViewAction::SetSearchText("cloud".into()));
        assert_eq!(
            state,
            ViewState {
                search_text: "cloud".into(),
                ..initial.clone()
            }
        );

        let mut state = initial.clone();
        state.apply(ViewAction::ToggleSidebar);
        assert_eq!(
            state,
            ViewState {
                sidebar_open: false,
                ..initial
            }
        );
    }

    #[test]
    fn test_actions_apply_in_order() {
        let mut state = ViewState::for_page(PageId::Messages);
        for action in [
            ViewAction::Select("1".into()),
            ViewAction::Select("3".into()),
            ViewAction::ToggleSidebar,
            ViewAction::ToggleSidebar,
            ViewAction::SetActiveTab(PageId::Team),
        ] {
            state.apply(action);
        }
        assert!(state.is_selected("3"));
        assert!(!state.is_selected("1"));
        assert!(state.sidebar_open);
        assert_eq!(state.active_tab, PageId::Team);

        state.apply(ViewAction::ClearSelection);
        assert_eq!(state.selection, None);
    }

    #[test]
    fn test_take_draft() {
        let mut state = ViewState::for_page(PageId::Messages);
        state.set_draft("   ");
        assert_eq!(state.take_draft(), None);
        assert_eq!(state.draft, "   ");

        state.set_draft("  Meeting at 3 PM?  ");
        assert_eq!(state.take_draft(), Some("Meeting at 3 PM?".to_string()));
        assert_eq!(state.draft, "");
    }

    #[test]
    fn test_month_offset_and_modal() {
        let mut state = ViewState::for_page(PageId::Calendar);
        state.apply(ViewAction::ShiftMonth(-1));
        state.apply(ViewAction::ShiftMonth(-1));
        state.apply(ViewAction::ShiftMonth(1));
        assert_eq!(state.month_offset, -1);

        state.apply(ViewAction::OpenEventModal);
        assert!(state.event_modal_open);
        state.apply(ViewAction::CloseEventModal);
        assert!(!state.event_modal_open);
    }

    #[test]
    fn test_serializable() {
        let mut state = ViewState::for_page(PageId::Reports);
        state.apply(ViewAction::SetPeriod(ReportPeriod::Quarter));
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains(r#""period":"quarter""#));
        let back: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&ViewAction::SetCategory("design".into())).unwrap();
        assert_eq!(json, r#"{"action":"set_category","value":"design"}"#);
        let json = serde_json::to_string(&ViewAction::ToggleSidebar).unwrap();
        assert_eq!(json, r#"{"action":"toggle_sidebar"}"#);
    }
}
