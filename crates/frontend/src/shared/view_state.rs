use contracts::shared::filter::FilterCriterion;
use contracts::shared::navigation::PageId;
use contracts::shared::view_state::{ViewAction, ViewState};
use leptos::prelude::*;

/// Reactive wrapper around a page's [`ViewState`].
///
/// Each page creates its own store on mount; the store (and everything the
/// user typed or selected) goes away with the page.
#[derive(Clone, Copy)]
pub struct ViewStateStore {
    pub state: RwSignal<ViewState>,
}

impl ViewStateStore {
    pub fn new(page: PageId) -> Self {
        Self {
            state: RwSignal::new(ViewState::for_page(page)),
        }
    }

    /// Creates the store and provides it to the page's children.
    pub fn provide(page: PageId) -> Self {
        let store = Self::new(page);
        provide_context(store);
        store
    }

    pub fn dispatch(&self, action: ViewAction) {
        log::debug!(
            "view action: {}",
            serde_json::to_string(&action).unwrap_or_else(|_| format!("{:?}", action))
        );
        self.state.update(|state| state.apply(action));
        log::trace!(
            "view state: {}",
            self.state
                .with_untracked(|s| serde_json::to_string(s).unwrap_or_default())
        );
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.with(|s| s.sidebar_open)
    }

    pub fn selected_category(&self) -> String {
        self.state.with(|s| s.selected_category.clone())
    }

    pub fn search_text(&self) -> String {
        self.state.with(|s| s.search_text.clone())
    }

    pub fn criterion(&self) -> FilterCriterion {
        self.state.with(ViewState::criterion)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.state.with(|s| s.is_selected(key))
    }

    pub fn selection(&self) -> Option<String> {
        self.state.with(|s| s.selection.clone())
    }

    pub fn month_offset(&self) -> i32 {
        self.state.with(|s| s.month_offset)
    }

    /// Sends the chat draft; `None` when it was blank.
    pub fn take_draft(&self) -> Option<String> {
        let mut taken = None;
        self.state.update(|state| taken = state.take_draft());
        if taken.is_some() {
            log::debug!("draft sent");
        }
        taken
    }
}

/// Store of the page currently mounted.
pub fn use_view_state() -> ViewStateStore {
    use_context::<ViewStateStore>().expect("ViewStateStore not provided by the page")
}
