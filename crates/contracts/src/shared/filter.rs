//! Category + free-text filtering of static collections.

use crate::domain::common::{CategoryChip, Record, CATEGORY_ALL};
use serde::{Deserialize, Serialize};

/// Category selector plus free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub category: String,
    pub query: String,
}

impl Default for FilterCriterion {
    fn default() -> Self {
        Self::all()
    }
}

impl FilterCriterion {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            query: query.into(),
        }
    }

    /// Matches every record.
    pub fn all() -> Self {
        Self::new(CATEGORY_ALL, "")
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// `false` when the criterion lets every record through.
    pub fn is_active(&self) -> bool {
        !self.is_all_categories() || !self.query.trim().is_empty()
    }

    fn is_all_categories(&self) -> bool {
        self.category.is_empty() || self.category == CATEGORY_ALL
    }

    pub fn matches_category(&self, category: &str) -> bool {
        self.is_all_categories() || self.category == category
    }

    /// Case-insensitive substring match against any of `fields`.
    pub fn matches_text(&self, fields: &[&str]) -> bool {
        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        fields
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.matches_category(record.category()) && self.matches_text(&record.search_fields())
    }
}

/// Visible subset of `records`, original order preserved.
pub fn filter_records<R: Record + Clone>(records: &[R], criterion: &FilterCriterion) -> Vec<R> {
    records
        .iter()
        .filter(|record| criterion.matches(*record))
        .cloned()
        .collect()
}

pub fn count_in_category<R: Record>(records: &[R], category: &str) -> usize {
    let criterion = FilterCriterion::all().with_category(category);
    records
        .iter()
        .filter(|record| criterion.matches_category(record.category()))
        .count()
}

/// Filter chips with counts computed from the collection; `all` first.
pub fn category_chips<R: Record>(
    records: &[R],
    all_label: &str,
    categories: &[(&str, &str)],
) -> Vec<CategoryChip> {
    std::iter::once(CategoryChip::new(CATEGORY_ALL, all_label, records.len()))
        .chain(
            categories
                .iter()
                .map(|(id, name)| CategoryChip::new(id, name, count_in_category(records, id))),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        id: u32,
        name: &'static str,
        role: &'static str,
        category: &'static str,
    }

    impl Record for Person {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.role]
        }
    }

    fn people() -> Vec<Person> {
        vec![
            Person {
                id: 1,
                name: "Sarah Anderson",
                role: "UI/UX Designer",
                category: "design",
            },
            Person {
                id: 2,
                name: "John Mitchell",
                role: "Frontend Developer",
                category: "development",
            },
            Person {
                id: 3,
                name: "Emily Chen",
                role: "Product Designer",
                category: "design",
            },
        ]
    }

    #[test]
    fn test_identity_for_all_and_empty_query() {
        let records = people();
        assert_eq!(filter_records(&records, &FilterCriterion::all()), records);
        assert!(!FilterCriterion::all().is_active());
    }

    #[test]
    fn test_no_match_is_empty() {
        let criterion = FilterCriterion::all().with_query("xyz-no-match");
        assert!(filter_records(&people(), &criterion).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let criterion = FilterCriterion::new("design", "sarah");
        assert!(filter_records::<Person>(&[], &criterion).is_empty());
    }

    #[test]
    fn test_category_and_query_combine_with_and() {
        let result = filter_records(&people(), &FilterCriterion::new("design", "sarah"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);

        // "designer" matches role text, but John is in development
        let result = filter_records(&people(), &FilterCriterion::new("development", "designer"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_over_all_fields() {
        let result = filter_records(&people(), &FilterCriterion::all().with_query("DESIGNER"));
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_whitespace_query_is_empty() {
        let criterion = FilterCriterion::all().with_query("   ");
        assert_eq!(filter_records(&people(), &criterion).len(), 3);
        assert!(!criterion.is_active());
    }

    #[test]
    fn test_query_is_trimmed() {
        let criterion = FilterCriterion::all().with_query("  chen ");
        assert_eq!(filter_records(&people(), &criterion).len(), 1);
    }

    #[test]
    fn test_empty_category_means_all() {
        let criterion = FilterCriterion::new("", "");
        assert_eq!(filter_records(&people(), &criterion).len(), 3);
    }

    #[test]
    fn test_idempotent() {
        let criterion = FilterCriterion::new("design", "e");
        let once = filter_records(&people(), &criterion);
        let twice = filter_records(&once, &criterion);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_order() {
        let result = filter_records(&people(), &FilterCriterion::all().with_query("n"));
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_category_chips() {
        let chips = category_chips(
            &people(),
            "All Teams",
            &[("design", "Design"), ("development", "Development"), ("qa", "QA")],
        );
        let counts: Vec<(&str, usize)> = chips.iter().map(|c| (c.id.as_str(), c.count)).collect();
        assert_eq!(
            counts,
            vec![("all", 3), ("design", 2), ("development", 1), ("qa", 0)]
        );
    }
}
