//! Page category constants.
//!
//! Every page root declares an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"a001_team_member--list"`) and a `data-page-category`, so the id
//! found in the DOM inspector leads straight to the module.

/// Filterable collection of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Single-record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Charts and headline metrics.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Free-form layout (chat, calendar).
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_team_member--list"));
        assert!(!is_valid_page_id("a001_team_member"));
        assert!(!is_valid_page_id("--list"));
        assert!(is_known_category(PAGE_CAT_CUSTOM));
        assert!(!is_known_category("legacy"));
    }
}
